use serde::{Deserialize, Serialize, Serializer};

use crate::model::component::{Category, Component};
use crate::model::needs::Need;
use crate::model::profile::BuildWeights;

pub const TIE: &str = "Tie";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Winner {
    Candidate(String),
    Tie,
}

impl Winner {
    pub fn as_str(&self) -> &str {
        match self {
            Winner::Candidate(name) => name,
            Winner::Tie => TIE,
        }
    }

    pub fn is_tie(&self) -> bool {
        matches!(self, Winner::Tie)
    }
}

impl Serialize for Winner {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub component: Component,
    pub performance_index: f64,
    #[serde(skip)]
    pub raw_index: f64,
    pub drivers: Vec<TermScore>,
}

impl CandidateDetail {
    pub fn name(&self) -> &str {
        self.component.name()
    }

    pub fn driver(&self, term: &str) -> Option<&TermScore> {
        self.drivers.iter().find(|d| d.term == term)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonVerdict {
    pub category: Category,
    pub winner: Winner,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    pub comparison: [CandidateDetail; 2],
}

impl ComparisonVerdict {
    /// Narrative text when a generator produced one, the deterministic reasoning otherwise.
    pub fn commentary(&self) -> &str {
        self.narrative.as_deref().unwrap_or(&self.reasoning)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    pub name: String,
    pub cpu: String,
    pub gpu: String,
    pub ram: String,
}

impl BuildSpec {
    pub fn part(&self, category: Category) -> &str {
        match category {
            Category::Cpu => &self.cpu,
            Category::Gpu => &self.gpu,
            Category::Ram => &self.ram,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildScore {
    pub name: String,
    pub build_index: f64,
    #[serde(skip)]
    pub raw_index: f64,
    pub category_wins: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildVerdict {
    pub winner: Winner,
    pub reasoning: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need: Option<Need>,
    pub weights: BuildWeights,
    pub builds: [BuildScore; 2],
    pub categories: Vec<ComparisonVerdict>,
}

impl BuildVerdict {
    pub fn commentary(&self) -> &str {
        self.narrative.as_deref().unwrap_or(&self.reasoning)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedComponent {
    pub rank: usize,
    pub name: String,
    pub performance_index: f64,
    #[serde(skip)]
    pub raw_index: f64,
    pub drivers: Vec<TermScore>,
}
