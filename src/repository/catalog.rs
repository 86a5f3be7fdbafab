use std::path::Path;

use serde::Deserialize;

use crate::model::Component;
use crate::repository::{InMemoryRepository, RepositoryError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    components: Vec<Component>,
}

/// Loads a catalog of the form `{"components": [{"category": "cpu", ...}, ...]}`.
pub fn load_catalog(path: &Path) -> Result<InMemoryRepository, RepositoryError> {
    let text = std::fs::read_to_string(path).map_err(|source| RepositoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let repo = parse_catalog(&text)?;
    tracing::info!(
        path = %path.display(),
        components = repo.len(),
        "loaded component catalog"
    );
    Ok(repo)
}

pub fn parse_catalog(text: &str) -> Result<InMemoryRepository, RepositoryError> {
    let file: CatalogFile =
        serde_json::from_str(text).map_err(|e| RepositoryError::Parse(e.to_string()))?;
    InMemoryRepository::new(file.components)
}
