use std::path::PathBuf;

use thiserror::Error;

use crate::model::{Category, Component};

pub mod catalog;
pub mod memory;
pub mod seed;

pub use catalog::{load_catalog, parse_catalog};
pub use memory::InMemoryRepository;
pub use seed::{builtin_components, seed_repository};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{category} not found: {name}")]
    NotFound { category: Category, name: String },

    #[error("duplicate {category} name in catalog: {name}")]
    DuplicateName { category: Category, name: String },

    #[error("invalid component {name}: non-finite value for {attributes}")]
    InvalidValue { name: String, attributes: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Read access to the component population. Implementations must return one
/// consistent snapshot per `fetch_population` call.
pub trait ComponentRepository: Send + Sync {
    fn fetch_population(&self, category: Category) -> Result<Vec<Component>, RepositoryError>;

    fn fetch_by_name(&self, category: Category, name: &str) -> Result<Component, RepositoryError>;
}

#[cfg(test)]
#[path = "../../tests/src_inline/repository/tests.rs"]
mod tests;
