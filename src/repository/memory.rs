use std::collections::BTreeSet;

use crate::model::{Category, Component};
use crate::repository::{ComponentRepository, RepositoryError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    components: Vec<Component>,
}

impl InMemoryRepository {
    /// Builds a repository, rejecting duplicate names within a category and
    /// records with non-finite numeric attributes.
    pub fn new(components: Vec<Component>) -> Result<Self, RepositoryError> {
        let mut seen: BTreeSet<(Category, String)> = BTreeSet::new();
        for component in &components {
            let key = (component.category(), component.name().to_string());
            if !seen.insert(key) {
                return Err(RepositoryError::DuplicateName {
                    category: component.category(),
                    name: component.name().to_string(),
                });
            }
            let bad = component.non_finite_attributes();
            if !bad.is_empty() {
                return Err(RepositoryError::InvalidValue {
                    name: component.name().to_string(),
                    attributes: bad.join(", "),
                });
            }
        }
        Ok(Self { components })
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn count(&self, category: Category) -> usize {
        self.components
            .iter()
            .filter(|c| c.category() == category)
            .count()
    }
}

impl ComponentRepository for InMemoryRepository {
    fn fetch_population(&self, category: Category) -> Result<Vec<Component>, RepositoryError> {
        Ok(self
            .components
            .iter()
            .filter(|c| c.category() == category)
            .cloned()
            .collect())
    }

    fn fetch_by_name(&self, category: Category, name: &str) -> Result<Component, RepositoryError> {
        self.components
            .iter()
            .find(|c| c.category() == category && c.name() == name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                category,
                name: name.to_string(),
            })
    }
}
