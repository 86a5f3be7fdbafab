use crate::model::{
    BuildScore, BuildSpec, BuildVerdict, BuildWeights, Category, ComparisonVerdict, Need, Winner,
};
use crate::pipeline::stage3_index::round2;

#[derive(Debug, Clone)]
pub struct Stage5Inputs<'a> {
    pub first: &'a BuildSpec,
    pub second: &'a BuildSpec,
    pub need: Option<Need>,
    pub weights: BuildWeights,
    /// One verdict per category, each with the first build's part in slot 0.
    pub verdicts: &'a [ComparisonVerdict],
}

pub fn run_stage5(inputs: &Stage5Inputs<'_>) -> BuildVerdict {
    let mut raw = [0.0f64; 2];
    let mut wins = [0u32; 2];

    for verdict in inputs.verdicts {
        let w = inputs.weights.weight(verdict.category);
        raw[0] += w * verdict.comparison[0].raw_index;
        raw[1] += w * verdict.comparison[1].raw_index;
        if let Some(slot) = slot_of_winner(verdict) {
            wins[slot] += 1;
        }
    }

    let (winner, reasoning) = if raw[0] > raw[1] {
        (
            Winner::Candidate(inputs.first.name.clone()),
            build_win_reasoning(&inputs.first.name, raw[0], raw[1]),
        )
    } else if raw[1] > raw[0] {
        (
            Winner::Candidate(inputs.second.name.clone()),
            build_win_reasoning(&inputs.second.name, raw[1], raw[0]),
        )
    } else {
        (Winner::Tie, "Both builds show equal build index".to_string())
    };

    BuildVerdict {
        winner,
        reasoning,
        narrative: None,
        need: inputs.need,
        weights: inputs.weights,
        builds: [
            build_score(&inputs.first.name, raw[0], wins[0]),
            build_score(&inputs.second.name, raw[1], wins[1]),
        ],
        categories: inputs.verdicts.to_vec(),
    }
}

/// Slot (0 or 1) holding the category winner, `None` on a tie.
pub fn slot_of_winner(verdict: &ComparisonVerdict) -> Option<usize> {
    let a = verdict.comparison[0].raw_index;
    let b = verdict.comparison[1].raw_index;
    if a > b {
        Some(0)
    } else if b > a {
        Some(1)
    } else {
        None
    }
}

pub fn category_parts(build: &BuildSpec) -> [(Category, &str); 3] {
    [
        (Category::Cpu, build.part(Category::Cpu)),
        (Category::Gpu, build.part(Category::Gpu)),
        (Category::Ram, build.part(Category::Ram)),
    ]
}

fn build_win_reasoning(winner: &str, winner_index: f64, loser_index: f64) -> String {
    format!(
        "{} wins (build index {:.2} vs {:.2})",
        winner,
        round2(winner_index),
        round2(loser_index)
    )
}

fn build_score(name: &str, raw_index: f64, category_wins: u32) -> BuildScore {
    BuildScore {
        name: name.to_string(),
        build_index: round2(raw_index),
        raw_index,
        category_wins,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_build.rs"]
mod tests;
