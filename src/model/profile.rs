use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::component::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Higher,
    Lower,
}

/// Score lookup for categorical attribute values. Labels are normalized
/// (trimmed, uppercased) on insert, so lookups are case-insensitive; values
/// missing from the table score 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct OrdinalTable {
    levels: BTreeMap<String, f64>,
    /// Labels that normalized onto an already present level.
    collisions: Vec<String>,
}

impl OrdinalTable {
    pub fn new(levels: &[(&str, f64)]) -> Self {
        let mut table = Self::default();
        for (label, score) in levels {
            table.insert(label, *score);
        }
        table
    }

    fn insert(&mut self, label: &str, score: f64) {
        if self.levels.insert(normalize_label(label), score).is_some() {
            self.collisions.push(label.to_string());
        }
    }

    pub fn score(&self, label: &str) -> f64 {
        self.levels
            .get(&normalize_label(label))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn levels(&self) -> impl Iterator<Item = (&str, f64)> {
        self.levels.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn collisions(&self) -> &[String] {
        &self.collisions
    }
}

impl From<BTreeMap<String, f64>> for OrdinalTable {
    fn from(raw: BTreeMap<String, f64>) -> Self {
        let mut table = Self::default();
        for (label, score) in &raw {
            table.insert(label, *score);
        }
        table
    }
}

impl From<OrdinalTable> for BTreeMap<String, f64> {
    fn from(table: OrdinalTable) -> Self {
        table.levels
    }
}

fn normalize_label(s: &str) -> String {
    s.trim().to_ascii_uppercase()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TermKind {
    /// Min-max scaled against the population bounds.
    Scaled { direction: Direction },
    /// Two-point score: 100 when set, 0 otherwise.
    Flag,
    Ordinal { table: OrdinalTable },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermPolicy {
    pub term: String,
    pub attribute: String,
    #[serde(flatten)]
    pub kind: TermKind,
    pub weight: f64,
}

impl TermPolicy {
    pub fn scaled(term: &str, attribute: &str, direction: Direction, weight: f64) -> Self {
        Self {
            term: term.to_string(),
            attribute: attribute.to_string(),
            kind: TermKind::Scaled { direction },
            weight,
        }
    }

    pub fn flag(term: &str, attribute: &str, weight: f64) -> Self {
        Self {
            term: term.to_string(),
            attribute: attribute.to_string(),
            kind: TermKind::Flag,
            weight,
        }
    }

    pub fn ordinal(term: &str, attribute: &str, table: OrdinalTable, weight: f64) -> Self {
        Self {
            term: term.to_string(),
            attribute: attribute.to_string(),
            kind: TermKind::Ordinal { table },
            weight,
        }
    }

    pub fn is_scaled(&self) -> bool {
        matches!(self.kind, TermKind::Scaled { .. })
    }
}

/// Weight table and attribute policy for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    pub category: Category,
    pub terms: Vec<TermPolicy>,
}

impl ScoringProfile {
    pub fn cpu_v1() -> Self {
        Self {
            category: Category::Cpu,
            terms: vec![
                TermPolicy::scaled("core_count", "core_count", Direction::Higher, 0.25),
                TermPolicy::scaled("clock_speed", "clock_speed_ghz", Direction::Higher, 0.20),
                TermPolicy::scaled("ipc", "ipc", Direction::Higher, 0.30),
                TermPolicy::scaled("thread_count", "thread_count", Direction::Higher, 0.10),
                TermPolicy::scaled("tdp_efficiency", "tdp_watts", Direction::Lower, 0.15),
            ],
        }
    }

    pub fn gpu_v1() -> Self {
        Self {
            category: Category::Gpu,
            terms: vec![
                TermPolicy::scaled("core_count", "core_count", Direction::Higher, 0.25),
                TermPolicy::scaled("core_clock", "core_clock_ghz", Direction::Higher, 0.20),
                TermPolicy::scaled(
                    "memory_bandwidth",
                    "memory_bandwidth_gbps",
                    Direction::Higher,
                    0.25,
                ),
                TermPolicy::scaled("vram", "vram_gb", Direction::Higher, 0.20),
                TermPolicy::flag("ray_tracing", "ray_tracing_support", 0.10),
            ],
        }
    }

    pub fn ram_v1() -> Self {
        Self {
            category: Category::Ram,
            terms: vec![
                TermPolicy::scaled("size", "size_gb", Direction::Higher, 0.40),
                TermPolicy::scaled("speed", "speed_mhz", Direction::Higher, 0.50),
                TermPolicy::ordinal("type", "type", memory_type_v1(), 0.10),
            ],
        }
    }

    pub fn default_for(category: Category) -> Self {
        match category {
            Category::Cpu => Self::cpu_v1(),
            Category::Gpu => Self::gpu_v1(),
            Category::Ram => Self::ram_v1(),
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.terms.iter().map(|t| t.weight).sum()
    }

    /// Attributes that take part in min-max scaling, in table order, deduplicated.
    pub fn scaled_attributes(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for term in self.terms.iter().filter(|t| t.is_scaled()) {
            if !out.contains(&term.attribute.as_str()) {
                out.push(&term.attribute);
            }
        }
        out
    }
}

pub fn memory_type_v1() -> OrdinalTable {
    OrdinalTable::new(&[("DDR3", 0.0), ("DDR4", 50.0), ("DDR5", 100.0)])
}

/// Category shares of the aggregate build index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildWeights {
    pub cpu: f64,
    pub gpu: f64,
    pub ram: f64,
}

impl BuildWeights {
    pub fn balanced() -> Self {
        Self {
            cpu: 1.0 / 3.0,
            gpu: 1.0 / 3.0,
            ram: 1.0 / 3.0,
        }
    }

    pub fn sum(&self) -> f64 {
        self.cpu + self.gpu + self.ram
    }

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Cpu => self.cpu,
            Category::Gpu => self.gpu,
            Category::Ram => self.ram,
        }
    }
}

impl Default for BuildWeights {
    fn default() -> Self {
        Self::balanced()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
