use std::cmp::Ordering;

use crate::error::ScoringError;
use crate::model::{AttributeScale, Component, ScoringProfile, TermScore};
use crate::pipeline::stage2_normalize::{clip100, score_term};

#[derive(Debug, Clone, PartialEq)]
pub struct IndexBreakdown {
    /// Unrounded; used for ordering.
    pub index: f64,
    /// In weight table order.
    pub terms: Vec<TermScore>,
}

pub fn compose_index(
    component: &Component,
    profile: &ScoringProfile,
    scale: &AttributeScale,
) -> Result<IndexBreakdown, ScoringError> {
    if component.category() != profile.category {
        return Err(ScoringError::CategoryMismatch {
            name: component.name().to_string(),
            expected: profile.category,
            found: component.category(),
        });
    }

    let mut terms = Vec::with_capacity(profile.terms.len());
    let mut index = 0.0f64;
    for policy in &profile.terms {
        let score = score_term(component, policy, scale)?;
        let contribution = policy.weight * score;
        index += contribution;
        terms.push(TermScore {
            term: policy.term.clone(),
            score,
            weight: policy.weight,
            contribution,
        });
    }

    let index = clip100(index);
    tracing::debug!(
        category = %profile.category,
        name = component.name(),
        index,
        "performance index"
    );
    Ok(IndexBreakdown { index, terms })
}

pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Terms ordered by weighted contribution, largest first; equal
/// contributions fall back to term name.
pub fn rank_drivers(terms: &[TermScore]) -> Vec<TermScore> {
    let mut v = terms.to_vec();
    v.sort_by(|a, b| {
        match b
            .contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => a.term.cmp(&b.term),
            other => other,
        }
    });
    v
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_index.rs"]
mod tests;
