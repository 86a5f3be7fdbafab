//! Orchestrates one request: fetch candidates and population, build the
//! scale, compose indices, decide, then optionally annotate with narrative
//! text. Every call rebuilds its scale; nothing is cached between calls.

use crate::config::{EngineConfig, ScaleMode, validate_build_weights};
use crate::error::ScoringError;
use crate::model::{
    AttributeScale, BuildSpec, BuildVerdict, BuildWeights, Category, Component, ComparisonVerdict,
    Need, RankedComponent,
};
use crate::narrative::{NarrativeGenerator, NoNarrative};
use crate::pipeline::stage1_scale::build_scale;
use crate::pipeline::stage4_verdict::{Stage4Inputs, run_stage4};
use crate::pipeline::stage5_build::{Stage5Inputs, category_parts, run_stage5};
use crate::pipeline::stage6_rank::run_stage6;
use crate::repository::ComponentRepository;

pub struct ScoringEngine {
    repository: Box<dyn ComponentRepository>,
    narrator: Box<dyn NarrativeGenerator>,
    config: EngineConfig,
}

impl ScoringEngine {
    pub fn new(repository: Box<dyn ComponentRepository>, config: EngineConfig) -> Self {
        Self {
            repository,
            narrator: Box::new(NoNarrative),
            config,
        }
    }

    pub fn with_narrator(mut self, narrator: Box<dyn NarrativeGenerator>) -> Self {
        self.narrator = narrator;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn compare(
        &self,
        category: Category,
        first: &str,
        second: &str,
    ) -> Result<ComparisonVerdict, ScoringError> {
        let a = self.repository.fetch_by_name(category, first)?;
        let b = self.repository.fetch_by_name(category, second)?;
        let mut verdict = self.score_pair(category, &a, &b)?;

        if self.narrator.is_available() {
            match self.narrator.summarize(category, &a, &b, &verdict) {
                Ok(text) => verdict.narrative = Some(text),
                Err(e) => tracing::warn!(
                    narrator = self.narrator.name(),
                    error = %e,
                    "narrative unavailable; using deterministic reasoning"
                ),
            }
        }

        tracing::info!(%category, winner = verdict.winner.as_str(), "{}", verdict.reasoning);
        Ok(verdict)
    }

    /// Compares two builds category by category, then combines the
    /// per-category indices with `weights`, which must be finite, non-negative
    /// and sum to 1. Narrative text never changes the deterministic winner.
    pub fn compare_builds(
        &self,
        first: &BuildSpec,
        second: &BuildSpec,
        need: Option<Need>,
        weights: BuildWeights,
    ) -> Result<BuildVerdict, ScoringError> {
        validate_build_weights("build", &weights)
            .map_err(|e| ScoringError::InvalidWeights(e.to_string()))?;

        let mut verdicts = Vec::with_capacity(3);
        for ((category, a_name), (_, b_name)) in category_parts(first)
            .into_iter()
            .zip(category_parts(second))
        {
            verdicts.push(self.compare(category, a_name, b_name)?);
        }

        let mut verdict = run_stage5(&Stage5Inputs {
            first,
            second,
            need,
            weights,
            verdicts: &verdicts,
        });

        if self.narrator.is_available() {
            match self.narrator.summarize_build(&verdict) {
                Ok(text) => verdict.narrative = Some(text),
                Err(e) => tracing::warn!(
                    narrator = self.narrator.name(),
                    error = %e,
                    "build narrative unavailable; using deterministic reasoning"
                ),
            }
        }

        tracing::info!(
            need = need.map(Need::name),
            winner = verdict.winner.as_str(),
            "{}",
            verdict.reasoning
        );
        Ok(verdict)
    }

    pub fn rank(&self, category: Category) -> Result<Vec<RankedComponent>, ScoringError> {
        let profile = self.config.profile(category);
        let population = self.repository.fetch_population(category)?;
        let scale = build_scale(profile, &population)?;
        run_stage6(profile, &scale, &population)
    }

    pub fn population(&self, category: Category) -> Result<Vec<Component>, ScoringError> {
        Ok(self.repository.fetch_population(category)?)
    }

    /// Deterministic verdict for two already-fetched components.
    pub fn score_pair(
        &self,
        category: Category,
        first: &Component,
        second: &Component,
    ) -> Result<ComparisonVerdict, ScoringError> {
        let profile = self.config.profile(category);
        let scale = self.scale_for(category, first, second)?;
        run_stage4(&Stage4Inputs {
            profile,
            scale: &scale,
            first,
            second,
        })
    }

    fn scale_for(
        &self,
        category: Category,
        first: &Component,
        second: &Component,
    ) -> Result<AttributeScale, ScoringError> {
        let profile = self.config.profile(category);
        match self.config.scale_mode {
            ScaleMode::Population => {
                let population = self.repository.fetch_population(category)?;
                build_scale(profile, &population)
            }
            ScaleMode::Pairwise => build_scale(profile, &[first.clone(), second.clone()]),
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/engine.rs"]
mod tests;
