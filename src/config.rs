use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{AttributeType, BuildWeights, Category, ScoringProfile, TermKind};

pub const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("{table} weights sum to {sum}, expected 1.0")]
    WeightSum { table: String, sum: f64 },

    #[error("{table} weight for '{term}' is negative or not finite: {weight}")]
    InvalidWeight {
        table: String,
        term: String,
        weight: f64,
    },

    #[error("{category} profile is placed in the {slot} slot")]
    CategoryMismatch { slot: Category, category: Category },

    #[error("{category} components have no attribute '{attribute}'")]
    UnknownAttribute {
        category: Category,
        attribute: String,
    },

    #[error("term '{term}' cannot score {category} attribute '{attribute}' of type {found:?}")]
    KindMismatch {
        category: Category,
        term: String,
        attribute: String,
        found: AttributeType,
    },

    #[error("ordinal level '{label}' of term '{term}' is outside [0, 100]: {score}")]
    OrdinalOutOfRange {
        term: String,
        label: String,
        score: f64,
    },

    #[error("ordinal term '{term}' lists label '{label}' more than once (labels are case-insensitive)")]
    DuplicateOrdinalLabel { term: String, label: String },

    #[error("{category} profile has no terms")]
    EmptyProfile { category: Category },
}

/// Which population the scale builder sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Every component of the category in the repository.
    #[default]
    Population,
    /// Only the two candidates being compared.
    Pairwise,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub cpu: ScoringProfile,
    pub gpu: ScoringProfile,
    pub ram: ScoringProfile,
    pub build: BuildWeights,
    pub scale_mode: ScaleMode,
}

impl EngineConfig {
    pub fn default_v1() -> Self {
        Self {
            cpu: ScoringProfile::cpu_v1(),
            gpu: ScoringProfile::gpu_v1(),
            ram: ScoringProfile::ram_v1(),
            build: BuildWeights::balanced(),
            scale_mode: ScaleMode::Population,
        }
    }

    pub fn profile(&self, category: Category) -> &ScoringProfile {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Ram => &self.ram,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for &slot in Category::all() {
            validate_profile(slot, self.profile(slot))?;
        }
        validate_build_weights("build", &self.build)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::default_v1()
    }
}

pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&text)?;
    tracing::info!(path = %path.display(), "loaded engine configuration");
    Ok(config)
}

/// Parses and validates a JSON configuration. Omitted sections keep their defaults.
pub fn parse_config(text: &str) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig =
        serde_json::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

pub fn validate_profile(slot: Category, profile: &ScoringProfile) -> Result<(), ConfigError> {
    let category = profile.category;
    if category != slot {
        return Err(ConfigError::CategoryMismatch { slot, category });
    }
    if profile.terms.is_empty() {
        return Err(ConfigError::EmptyProfile { category });
    }

    let table = format!("{category}");
    for term in &profile.terms {
        if !term.weight.is_finite() || term.weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                table,
                term: term.term.clone(),
                weight: term.weight,
            });
        }

        let found = category.attribute_type(&term.attribute).ok_or_else(|| {
            ConfigError::UnknownAttribute {
                category,
                attribute: term.attribute.clone(),
            }
        })?;
        let expected = match &term.kind {
            TermKind::Scaled { .. } => AttributeType::Number,
            TermKind::Flag => AttributeType::Flag,
            TermKind::Ordinal { .. } => AttributeType::Label,
        };
        if found != expected {
            return Err(ConfigError::KindMismatch {
                category,
                term: term.term.clone(),
                attribute: term.attribute.clone(),
                found,
            });
        }

        if let TermKind::Ordinal { table: levels } = &term.kind {
            if let Some(label) = levels.collisions().first() {
                return Err(ConfigError::DuplicateOrdinalLabel {
                    term: term.term.clone(),
                    label: label.clone(),
                });
            }
            for (label, score) in levels.levels() {
                if !(0.0..=100.0).contains(&score) {
                    return Err(ConfigError::OrdinalOutOfRange {
                        term: term.term.clone(),
                        label: label.to_string(),
                        score,
                    });
                }
            }
        }
    }

    check_sum(&table, profile.weight_sum())
}

pub fn validate_build_weights(table: &str, weights: &BuildWeights) -> Result<(), ConfigError> {
    for (term, weight) in [("cpu", weights.cpu), ("gpu", weights.gpu), ("ram", weights.ram)] {
        if !weight.is_finite() || weight < 0.0 {
            return Err(ConfigError::InvalidWeight {
                table: table.to_string(),
                term: term.to_string(),
                weight,
            });
        }
    }
    check_sum(table, weights.sum())
}

fn check_sum(table: &str, sum: f64) -> Result<(), ConfigError> {
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(ConfigError::WeightSum {
            table: table.to_string(),
            sum,
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/config.rs"]
mod tests;
