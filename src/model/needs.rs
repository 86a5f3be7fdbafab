use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::profile::BuildWeights;

/// Usage profile that decides how much each category counts in a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Need {
    #[default]
    Balanced,
    Gaming,
    Work,
    VideoEditing,
    #[serde(rename = "3d_rendering")]
    Rendering3d,
}

impl Need {
    pub fn all() -> &'static [Need] {
        &[
            Need::Balanced,
            Need::Gaming,
            Need::Work,
            Need::VideoEditing,
            Need::Rendering3d,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Need::Balanced => "balanced",
            Need::Gaming => "gaming",
            Need::Work => "work",
            Need::VideoEditing => "video_editing",
            Need::Rendering3d => "3d_rendering",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Need::Balanced => "Equal emphasis on processor, graphics and memory",
            Need::Gaming => "High-performance gaming with modern AAA titles",
            Need::Work => "General office work, web browsing, and productivity",
            Need::VideoEditing => "Professional video editing and content creation",
            Need::Rendering3d => "3D modeling, rendering, and CAD work",
        }
    }

    pub fn build_weights(self) -> BuildWeights {
        match self {
            Need::Balanced => BuildWeights::balanced(),
            Need::Gaming => BuildWeights {
                cpu: 0.30,
                gpu: 0.55,
                ram: 0.15,
            },
            Need::Work => BuildWeights {
                cpu: 0.50,
                gpu: 0.15,
                ram: 0.35,
            },
            Need::VideoEditing => BuildWeights {
                cpu: 0.40,
                gpu: 0.35,
                ram: 0.25,
            },
            Need::Rendering3d => BuildWeights {
                cpu: 0.35,
                gpu: 0.45,
                ram: 0.20,
            },
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Need {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        Need::all()
            .iter()
            .copied()
            .find(|n| n.name() == key)
            .ok_or_else(|| {
                format!(
                    "unknown need '{s}' (use balanced|gaming|work|video_editing|3d_rendering)"
                )
            })
    }
}
