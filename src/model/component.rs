use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Ram,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Cpu, Category::Gpu, Category::Ram]
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Gpu => "GPU",
            Category::Ram => "RAM",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Gpu => "gpu",
            Category::Ram => "ram",
        }
    }

    /// Attributes exposed by every component of this category, with their value type.
    pub fn attributes(self) -> &'static [(&'static str, AttributeType)] {
        match self {
            Category::Cpu => CPU_ATTRIBUTES,
            Category::Gpu => GPU_ATTRIBUTES,
            Category::Ram => RAM_ATTRIBUTES,
        }
    }

    pub fn attribute_type(self, attribute: &str) -> Option<AttributeType> {
        self.attributes()
            .iter()
            .find(|(name, _)| *name == attribute)
            .map(|(_, ty)| *ty)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Category::Cpu),
            "gpu" => Ok(Category::Gpu),
            "ram" => Ok(Category::Ram),
            other => Err(format!("unknown category '{other}' (use cpu|gpu|ram)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    Number,
    Flag,
    Label,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Number(f64),
    Flag(bool),
    Label(&'a str),
}

const CPU_ATTRIBUTES: &[(&str, AttributeType)] = &[
    ("clock_speed_ghz", AttributeType::Number),
    ("core_count", AttributeType::Number),
    ("thread_count", AttributeType::Number),
    ("cache_size_l1", AttributeType::Number),
    ("cache_size_l2", AttributeType::Number),
    ("cache_size_l3", AttributeType::Number),
    ("tdp_watts", AttributeType::Number),
    ("architecture_generation", AttributeType::Label),
    ("ipc", AttributeType::Number),
];

const GPU_ATTRIBUTES: &[(&str, AttributeType)] = &[
    ("vram_gb", AttributeType::Number),
    ("core_count", AttributeType::Number),
    ("core_clock_ghz", AttributeType::Number),
    ("memory_bandwidth_gbps", AttributeType::Number),
    ("architecture", AttributeType::Label),
    ("ray_tracing_support", AttributeType::Flag),
    ("release_year", AttributeType::Number),
];

const RAM_ATTRIBUTES: &[(&str, AttributeType)] = &[
    ("size_gb", AttributeType::Number),
    ("speed_mhz", AttributeType::Number),
    ("type", AttributeType::Label),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cpu {
    pub name: String,
    pub clock_speed_ghz: f64,
    pub core_count: u32,
    pub thread_count: u32,
    #[serde(default)]
    pub cache_size_l1: u32,
    #[serde(default)]
    pub cache_size_l2: u32,
    #[serde(default)]
    pub cache_size_l3: u32,
    pub tdp_watts: u32,
    #[serde(default)]
    pub architecture_generation: String,
    pub ipc: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gpu {
    pub name: String,
    pub vram_gb: f64,
    pub core_count: u32,
    pub core_clock_ghz: f64,
    pub memory_bandwidth_gbps: f64,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub ray_tracing_support: bool,
    #[serde(default)]
    pub release_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ram {
    pub name: String,
    pub size_gb: u32,
    pub speed_mhz: u32,
    #[serde(rename = "type")]
    pub memory_type: String,
}

/// A catalog record. The serialized form carries a `category` tag next to the
/// record's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Component {
    Cpu(Cpu),
    Gpu(Gpu),
    Ram(Ram),
}

impl Component {
    pub fn category(&self) -> Category {
        match self {
            Component::Cpu(_) => Category::Cpu,
            Component::Gpu(_) => Category::Gpu,
            Component::Ram(_) => Category::Ram,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Component::Cpu(c) => &c.name,
            Component::Gpu(g) => &g.name,
            Component::Ram(r) => &r.name,
        }
    }

    pub fn attribute(&self, key: &str) -> Option<AttributeValue<'_>> {
        match self {
            Component::Cpu(c) => match key {
                "clock_speed_ghz" => Some(AttributeValue::Number(c.clock_speed_ghz)),
                "core_count" => Some(AttributeValue::Number(c.core_count as f64)),
                "thread_count" => Some(AttributeValue::Number(c.thread_count as f64)),
                "cache_size_l1" => Some(AttributeValue::Number(c.cache_size_l1 as f64)),
                "cache_size_l2" => Some(AttributeValue::Number(c.cache_size_l2 as f64)),
                "cache_size_l3" => Some(AttributeValue::Number(c.cache_size_l3 as f64)),
                "tdp_watts" => Some(AttributeValue::Number(c.tdp_watts as f64)),
                "architecture_generation" => {
                    Some(AttributeValue::Label(&c.architecture_generation))
                }
                "ipc" => Some(AttributeValue::Number(c.ipc)),
                _ => None,
            },
            Component::Gpu(g) => match key {
                "vram_gb" => Some(AttributeValue::Number(g.vram_gb)),
                "core_count" => Some(AttributeValue::Number(g.core_count as f64)),
                "core_clock_ghz" => Some(AttributeValue::Number(g.core_clock_ghz)),
                "memory_bandwidth_gbps" => Some(AttributeValue::Number(g.memory_bandwidth_gbps)),
                "architecture" => Some(AttributeValue::Label(&g.architecture)),
                "ray_tracing_support" => Some(AttributeValue::Flag(g.ray_tracing_support)),
                "release_year" => Some(AttributeValue::Number(g.release_year as f64)),
                _ => None,
            },
            Component::Ram(r) => match key {
                "size_gb" => Some(AttributeValue::Number(r.size_gb as f64)),
                "speed_mhz" => Some(AttributeValue::Number(r.speed_mhz as f64)),
                "type" => Some(AttributeValue::Label(&r.memory_type)),
                _ => None,
            },
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.attribute(key)? {
            AttributeValue::Number(v) => Some(v),
            _ => None,
        }
    }

    /// Names of numeric attributes holding NaN or infinite values.
    pub fn non_finite_attributes(&self) -> Vec<&'static str> {
        self.category()
            .attributes()
            .iter()
            .filter(|(name, ty)| {
                *ty == AttributeType::Number && self.number(name).is_some_and(|v| !v.is_finite())
            })
            .map(|(name, _)| *name)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/component.rs"]
mod tests;
