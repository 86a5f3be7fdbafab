//! Population-relative performance scoring for PC components.
//!
//! Each comparison builds min/max bounds over the whole current population of
//! a category, maps every weighted attribute onto a 0-100 scale, and sums the
//! weighted terms into a performance index. Two candidates are ordered on the
//! unrounded index; exact equality is a tie.

pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod model;
pub mod narrative;
pub mod pipeline;
pub mod report;
pub mod repository;

pub use config::{EngineConfig, ScaleMode, load_config};
pub use engine::ScoringEngine;
pub use error::ScoringError;
pub use model::{BuildSpec, BuildVerdict, Category, Component, ComparisonVerdict, Need, Winner};
pub use narrative::{NarrativeError, NarrativeGenerator, NoNarrative, TemplateNarrative};
pub use pipeline::stage2_normalize::normalize;
pub use repository::{ComponentRepository, InMemoryRepository, RepositoryError};
