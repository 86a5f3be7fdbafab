//! Optional prose layered on top of deterministic verdicts.
//!
//! A generator only annotates: the engine copies its text into the verdict's
//! `narrative` field and never lets it touch the winner. When a generator is
//! unavailable or fails, callers fall back to the verdict's `reasoning`.

use thiserror::Error;

use crate::model::{BuildVerdict, Category, Component, ComparisonVerdict};

pub mod template;

pub use template::TemplateNarrative;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NarrativeError {
    #[error("narrative generator unavailable: {0}")]
    Unavailable(String),
}

pub trait NarrativeGenerator: Send + Sync {
    fn summarize(
        &self,
        category: Category,
        first: &Component,
        second: &Component,
        verdict: &ComparisonVerdict,
    ) -> Result<String, NarrativeError>;

    fn summarize_build(&self, _verdict: &BuildVerdict) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable(format!(
            "{} does not describe builds",
            self.name()
        )))
    }

    fn name(&self) -> &'static str;

    /// False when calling `summarize` is pointless, so callers can skip it.
    fn is_available(&self) -> bool;
}

/// Generator used when narrative text is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNarrative;

impl NoNarrative {
    pub fn new() -> Self {
        Self
    }
}

impl NarrativeGenerator for NoNarrative {
    fn summarize(
        &self,
        _category: Category,
        _first: &Component,
        _second: &Component,
        _verdict: &ComparisonVerdict,
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable(
            "narrative generation disabled".to_string(),
        ))
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn is_available(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/narrative/tests.rs"]
mod tests;
