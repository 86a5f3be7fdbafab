use crate::error::ScoringError;
use crate::model::{
    AttributeScale, CandidateDetail, Category, Component, ComparisonVerdict, ScoringProfile,
    Winner,
};
use crate::pipeline::stage3_index::{IndexBreakdown, compose_index, rank_drivers, round2};

#[derive(Debug, Clone)]
pub struct Stage4Inputs<'a> {
    pub profile: &'a ScoringProfile,
    pub scale: &'a AttributeScale,
    pub first: &'a Component,
    pub second: &'a Component,
}

pub fn run_stage4(inputs: &Stage4Inputs<'_>) -> Result<ComparisonVerdict, ScoringError> {
    let category = inputs.profile.category;
    let a = compose_index(inputs.first, inputs.profile, inputs.scale)?;
    let b = compose_index(inputs.second, inputs.profile, inputs.scale)?;

    let winner = decide(inputs.first.name(), a.index, inputs.second.name(), b.index);
    let reasoning = match &winner {
        Winner::Tie => tie_reasoning(category),
        Winner::Candidate(_) if a.index > b.index => {
            win_reasoning(inputs.first.name(), a.index, b.index)
        }
        Winner::Candidate(_) => win_reasoning(inputs.second.name(), b.index, a.index),
    };

    Ok(ComparisonVerdict {
        category,
        winner,
        reasoning,
        narrative: None,
        comparison: [detail(inputs.first, &a), detail(inputs.second, &b)],
    })
}

/// Strict ordering on the unrounded index; exact equality is a tie.
pub fn decide(first: &str, first_index: f64, second: &str, second_index: f64) -> Winner {
    if first_index > second_index {
        Winner::Candidate(first.to_string())
    } else if second_index > first_index {
        Winner::Candidate(second.to_string())
    } else {
        Winner::Tie
    }
}

pub fn win_reasoning(winner: &str, winner_index: f64, loser_index: f64) -> String {
    format!(
        "{} wins (index {:.2} vs {:.2})",
        winner,
        round2(winner_index),
        round2(loser_index)
    )
}

pub fn tie_reasoning(category: Category) -> String {
    format!("Both {}s show equal performance index", category.label())
}

fn detail(component: &Component, breakdown: &IndexBreakdown) -> CandidateDetail {
    CandidateDetail {
        component: component.clone(),
        performance_index: round2(breakdown.index),
        raw_index: breakdown.index,
        drivers: rank_drivers(&breakdown.terms),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_verdict.rs"]
mod tests;
