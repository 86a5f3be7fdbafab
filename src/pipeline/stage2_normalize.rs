use crate::error::ScoringError;
use crate::model::{
    AttributeScale, AttributeValue, Bounds, Component, Direction, TermKind, TermPolicy,
};

pub const SCORE_MAX: f64 = 100.0;

pub fn clip100(x: f64) -> f64 {
    if x < 0.0 {
        0.0
    } else if x > SCORE_MAX {
        SCORE_MAX
    } else {
        x
    }
}

/// Linear map of `value` from `[min, max]` onto `[0, 100]`.
///
/// Equal bounds score 100. Values that fall outside the bounds (the
/// population changed between scale build and lookup) are clamped.
pub fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return SCORE_MAX;
    }
    clip100(SCORE_MAX * (value - min) / (max - min))
}

/// Directed score against population bounds. Degenerate bounds score 100 in
/// either direction.
pub fn directed_score(value: f64, bounds: Bounds, direction: Direction) -> f64 {
    if bounds.is_degenerate() {
        return SCORE_MAX;
    }
    let n = normalize(value, bounds.min, bounds.max);
    match direction {
        Direction::Higher => n,
        Direction::Lower => SCORE_MAX - n,
    }
}

pub fn flag_score(set: bool) -> f64 {
    if set { SCORE_MAX } else { 0.0 }
}

/// Score in `[0, 100]` of one term of the weight table for `component`.
pub fn score_term(
    component: &Component,
    term: &TermPolicy,
    scale: &AttributeScale,
) -> Result<f64, ScoringError> {
    let missing = || ScoringError::MissingAttribute {
        name: component.name().to_string(),
        attribute: term.attribute.clone(),
    };
    let value = component.attribute(&term.attribute).ok_or_else(missing)?;

    let score = match (&term.kind, value) {
        (TermKind::Scaled { direction }, AttributeValue::Number(v)) => {
            let bounds = scale.bounds(&term.attribute).ok_or_else(missing)?;
            directed_score(v, bounds, *direction)
        }
        (TermKind::Flag, AttributeValue::Flag(set)) => flag_score(set),
        (TermKind::Ordinal { table }, AttributeValue::Label(label)) => clip100(table.score(label)),
        _ => return Err(missing()),
    };
    Ok(score)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_normalize.rs"]
mod tests;
