pub mod component;
pub mod needs;
pub mod profile;
pub mod scale;
pub mod verdict;

pub use component::{AttributeType, AttributeValue, Category, Component, Cpu, Gpu, Ram};
pub use needs::Need;
pub use profile::{BuildWeights, Direction, OrdinalTable, ScoringProfile, TermKind, TermPolicy};
pub use scale::{AttributeScale, Bounds};
pub use verdict::{
    BuildScore, BuildSpec, BuildVerdict, CandidateDetail, ComparisonVerdict, RankedComponent,
    TIE, TermScore, Winner,
};
