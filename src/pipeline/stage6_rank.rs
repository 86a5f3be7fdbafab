use std::cmp::Ordering;

use crate::error::ScoringError;
use crate::model::{AttributeScale, Component, RankedComponent, ScoringProfile};
use crate::pipeline::stage3_index::{compose_index, rank_drivers, round2};

/// Scores every member of `population` against `scale`, best first. Equal
/// indices are ordered by name so the listing is stable.
pub fn run_stage6(
    profile: &ScoringProfile,
    scale: &AttributeScale,
    population: &[Component],
) -> Result<Vec<RankedComponent>, ScoringError> {
    let mut scored = Vec::with_capacity(population.len());
    for component in population
        .iter()
        .filter(|c| c.category() == profile.category)
    {
        let breakdown = compose_index(component, profile, scale)?;
        scored.push((component.name().to_string(), breakdown));
    }

    scored.sort_by(|a, b| {
        match b.1.index.partial_cmp(&a.1.index).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.0.cmp(&b.0),
            other => other,
        }
    });

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(i, (name, breakdown))| RankedComponent {
            rank: i + 1,
            name,
            performance_index: round2(breakdown.index),
            raw_index: breakdown.index,
            drivers: rank_drivers(&breakdown.terms),
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_rank.rs"]
mod tests;
