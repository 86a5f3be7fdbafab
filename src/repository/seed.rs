use crate::model::{Component, Cpu, Gpu, Ram};
use crate::repository::{InMemoryRepository, RepositoryError};

struct CpuDef {
    name: &'static str,
    clock_speed_ghz: f64,
    core_count: u32,
    thread_count: u32,
    cache: [u32; 3],
    tdp_watts: u32,
    architecture_generation: &'static str,
    ipc: f64,
}

struct GpuDef {
    name: &'static str,
    vram_gb: f64,
    core_count: u32,
    core_clock_ghz: f64,
    memory_bandwidth_gbps: f64,
    architecture: &'static str,
    ray_tracing_support: bool,
    release_year: u32,
}

struct RamDef {
    name: &'static str,
    size_gb: u32,
    speed_mhz: u32,
    memory_type: &'static str,
}

const BUILTIN_CPUS: &[CpuDef] = &[
    CpuDef {
        name: "Intel Core i7-12700K",
        clock_speed_ghz: 3.6,
        core_count: 12,
        thread_count: 20,
        cache: [384, 12288, 25600],
        tdp_watts: 125,
        architecture_generation: "Alder Lake",
        ipc: 1.2,
    },
    CpuDef {
        name: "AMD Ryzen 7 5800X",
        clock_speed_ghz: 3.8,
        core_count: 8,
        thread_count: 16,
        cache: [512, 4096, 32768],
        tdp_watts: 105,
        architecture_generation: "Zen 3",
        ipc: 1.1,
    },
    CpuDef {
        name: "Intel Core i5-12400F",
        clock_speed_ghz: 2.5,
        core_count: 6,
        thread_count: 12,
        cache: [192, 6144, 18432],
        tdp_watts: 65,
        architecture_generation: "Alder Lake",
        ipc: 1.0,
    },
    CpuDef {
        name: "AMD Ryzen 5 5600X",
        clock_speed_ghz: 3.7,
        core_count: 6,
        thread_count: 12,
        cache: [384, 3072, 32768],
        tdp_watts: 65,
        architecture_generation: "Zen 3",
        ipc: 1.1,
    },
];

const BUILTIN_GPUS: &[GpuDef] = &[
    GpuDef {
        name: "NVIDIA RTX 4080",
        vram_gb: 16.0,
        core_count: 9728,
        core_clock_ghz: 2.21,
        memory_bandwidth_gbps: 716.8,
        architecture: "Ada Lovelace",
        ray_tracing_support: true,
        release_year: 2022,
    },
    GpuDef {
        name: "NVIDIA RTX 4070",
        vram_gb: 12.0,
        core_count: 5888,
        core_clock_ghz: 1.92,
        memory_bandwidth_gbps: 504.2,
        architecture: "Ada Lovelace",
        ray_tracing_support: true,
        release_year: 2023,
    },
    GpuDef {
        name: "AMD Radeon RX 7800 XT",
        vram_gb: 16.0,
        core_count: 3840,
        core_clock_ghz: 2.12,
        memory_bandwidth_gbps: 624.0,
        architecture: "RDNA 3",
        ray_tracing_support: true,
        release_year: 2023,
    },
    GpuDef {
        name: "NVIDIA RTX 3060",
        vram_gb: 12.0,
        core_count: 3584,
        core_clock_ghz: 1.32,
        memory_bandwidth_gbps: 360.0,
        architecture: "Ampere",
        ray_tracing_support: true,
        release_year: 2021,
    },
];

const BUILTIN_RAMS: &[RamDef] = &[
    RamDef {
        name: "Corsair Vengeance LPX 32GB DDR4-3200",
        size_gb: 32,
        speed_mhz: 3200,
        memory_type: "DDR4",
    },
    RamDef {
        name: "G.Skill Ripjaws V 16GB DDR4-3600",
        size_gb: 16,
        speed_mhz: 3600,
        memory_type: "DDR4",
    },
    RamDef {
        name: "Corsair Dominator Platinum 64GB DDR5-5600",
        size_gb: 64,
        speed_mhz: 5600,
        memory_type: "DDR5",
    },
    RamDef {
        name: "G.Skill Trident Z5 32GB DDR5-6000",
        size_gb: 32,
        speed_mhz: 6000,
        memory_type: "DDR5",
    },
];

pub fn builtin_components() -> Vec<Component> {
    let cpus = BUILTIN_CPUS.iter().map(|d| {
        Component::Cpu(Cpu {
            name: d.name.to_string(),
            clock_speed_ghz: d.clock_speed_ghz,
            core_count: d.core_count,
            thread_count: d.thread_count,
            cache_size_l1: d.cache[0],
            cache_size_l2: d.cache[1],
            cache_size_l3: d.cache[2],
            tdp_watts: d.tdp_watts,
            architecture_generation: d.architecture_generation.to_string(),
            ipc: d.ipc,
        })
    });
    let gpus = BUILTIN_GPUS.iter().map(|d| {
        Component::Gpu(Gpu {
            name: d.name.to_string(),
            vram_gb: d.vram_gb,
            core_count: d.core_count,
            core_clock_ghz: d.core_clock_ghz,
            memory_bandwidth_gbps: d.memory_bandwidth_gbps,
            architecture: d.architecture.to_string(),
            ray_tracing_support: d.ray_tracing_support,
            release_year: d.release_year,
        })
    });
    let rams = BUILTIN_RAMS.iter().map(|d| {
        Component::Ram(Ram {
            name: d.name.to_string(),
            size_gb: d.size_gb,
            speed_mhz: d.speed_mhz,
            memory_type: d.memory_type.to_string(),
        })
    });
    cpus.chain(gpus).chain(rams).collect()
}

pub fn seed_repository() -> Result<InMemoryRepository, RepositoryError> {
    InMemoryRepository::new(builtin_components())
}
