use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::component::Category;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub fn of(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub fn include(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }
}

/// Per-attribute bounds observed over one population snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeScale {
    pub category: Category,
    pub population: usize,
    pub bounds: BTreeMap<String, Bounds>,
}

impl AttributeScale {
    pub fn bounds(&self, attribute: &str) -> Option<Bounds> {
        self.bounds.get(attribute).copied()
    }
}
