use thiserror::Error;

use crate::model::Category;
use crate::repository::RepositoryError;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("{category} not found: {name}")]
    ComponentNotFound { category: Category, name: String },

    #[error("no {0} components available to build a scale")]
    EmptyPopulation(Category),

    #[error("{name} is a {found}, expected a {expected}")]
    CategoryMismatch {
        name: String,
        expected: Category,
        found: Category,
    },

    #[error("{name} has no usable value for attribute '{attribute}'")]
    MissingAttribute { name: String, attribute: String },

    #[error("invalid build weights: {0}")]
    InvalidWeights(String),

    #[error("repository error: {0}")]
    Repository(String),
}

impl From<RepositoryError> for ScoringError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound { category, name } => {
                ScoringError::ComponentNotFound { category, name }
            }
            other => ScoringError::Repository(other.to_string()),
        }
    }
}
