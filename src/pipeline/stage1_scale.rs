use std::collections::BTreeMap;

use crate::error::ScoringError;
use crate::model::{AttributeScale, Bounds, Component, ScoringProfile};

/// Min/max of every scaled attribute of `profile` over `population`.
///
/// Records of another category are skipped. Flag and ordinal terms never get
/// bounds; they score through fixed tables in the composer.
pub fn build_scale(
    profile: &ScoringProfile,
    population: &[Component],
) -> Result<AttributeScale, ScoringError> {
    let category = profile.category;
    let attributes = profile.scaled_attributes();
    let mut bounds: BTreeMap<String, Bounds> = BTreeMap::new();
    let mut counted = 0usize;

    for component in population {
        if component.category() != category {
            tracing::warn!(
                name = component.name(),
                found = %component.category(),
                expected = %category,
                "skipping population record of another category"
            );
            continue;
        }
        counted += 1;

        for &attribute in &attributes {
            let value =
                component
                    .number(attribute)
                    .ok_or_else(|| ScoringError::MissingAttribute {
                        name: component.name().to_string(),
                        attribute: attribute.to_string(),
                    })?;
            bounds
                .entry(attribute.to_string())
                .and_modify(|b| b.include(value))
                .or_insert_with(|| Bounds::of(value));
        }
    }

    if counted == 0 {
        return Err(ScoringError::EmptyPopulation(category));
    }

    for (attribute, b) in &bounds {
        tracing::debug!(
            %category,
            attribute = attribute.as_str(),
            min = b.min,
            max = b.max,
            "scale bounds"
        );
    }

    Ok(AttributeScale {
        category,
        population: counted,
        bounds,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_scale.rs"]
mod tests;
