use super::*;
use crate::model::{Cpu, Ram, Winner};
use crate::narrative::{NarrativeError, TemplateNarrative};
use crate::repository::{InMemoryRepository, seed_repository};

fn ram(name: &str, size_gb: u32, speed_mhz: u32, memory_type: &str) -> Component {
    Component::Ram(Ram {
        name: name.to_string(),
        size_gb,
        speed_mhz,
        memory_type: memory_type.to_string(),
    })
}

fn cpu(name: &str) -> Component {
    Component::Cpu(Cpu {
        name: name.to_string(),
        clock_speed_ghz: 3.8,
        core_count: 8,
        thread_count: 16,
        cache_size_l1: 512,
        cache_size_l2: 4096,
        cache_size_l3: 32768,
        tdp_watts: 105,
        architecture_generation: "Zen 3".to_string(),
        ipc: 1.15,
    })
}

fn engine_with(components: Vec<Component>, config: EngineConfig) -> ScoringEngine {
    ScoringEngine::new(
        Box::new(InMemoryRepository::new(components).unwrap()),
        config,
    )
}

fn reference_rams() -> Vec<Component> {
    vec![
        ram("Vengeance 32GB", 32, 3200, "DDR4"),
        ram("Dominator 64GB", 64, 5600, "DDR5"),
        ram("Ripjaws 16GB", 16, 3600, "DDR4"),
    ]
}

struct FailingNarrator;

impl NarrativeGenerator for FailingNarrator {
    fn summarize(
        &self,
        _category: Category,
        _first: &Component,
        _second: &Component,
        _verdict: &ComparisonVerdict,
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable("upstream timeout".to_string()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[test]
fn test_compare_against_population() {
    let engine = engine_with(reference_rams(), EngineConfig::default_v1());
    let v = engine
        .compare(Category::Ram, "Vengeance 32GB", "Dominator 64GB")
        .unwrap();
    assert_eq!(v.winner, Winner::Candidate("Dominator 64GB".to_string()));
    assert_eq!(v.comparison[0].performance_index, 18.33);
    assert_eq!(v.comparison[1].performance_index, 100.0);
    assert!(v.narrative.is_none());
    assert_eq!(v.commentary(), v.reasoning);
}

#[test]
fn test_pairwise_scale_uses_only_candidates() {
    let mut config = EngineConfig::default_v1();
    config.scale_mode = ScaleMode::Pairwise;
    let engine = engine_with(reference_rams(), config);
    let v = engine
        .compare(Category::Ram, "Vengeance 32GB", "Dominator 64GB")
        .unwrap();
    // size drops to the pair minimum: 0.4*0 + 0.5*0 + 0.1*50
    assert_eq!(v.comparison[0].performance_index, 5.0);
    assert_eq!(v.winner.as_str(), "Dominator 64GB");
}

#[test]
fn test_missing_component_named_in_error() {
    let engine = engine_with(reference_rams(), EngineConfig::default_v1());
    let err = engine
        .compare(Category::Ram, "Vengeance 32GB", "Nonexistent Kit")
        .unwrap_err();
    assert_eq!(
        err,
        ScoringError::ComponentNotFound {
            category: Category::Ram,
            name: "Nonexistent Kit".to_string(),
        }
    );
    assert!(err.to_string().contains("Nonexistent Kit"));
}

#[test]
fn test_rank_empty_category_fails() {
    let engine = engine_with(reference_rams(), EngineConfig::default_v1());
    assert_eq!(
        engine.rank(Category::Cpu).unwrap_err(),
        ScoringError::EmptyPopulation(Category::Cpu)
    );
}

#[test]
fn test_single_cpu_against_itself_ties_at_full_index() {
    let engine = engine_with(vec![cpu("Ryzen 7")], EngineConfig::default_v1());
    let v = engine.compare(Category::Cpu, "Ryzen 7", "Ryzen 7").unwrap();
    assert!(v.winner.is_tie());
    assert_eq!(v.winner.as_str(), "Tie");
    assert_eq!(v.comparison[0].performance_index, 100.0);
    assert_eq!(v.comparison[1].performance_index, 100.0);
    assert_eq!(v.reasoning, "Both CPUs show equal performance index");
}

#[test]
fn test_repeated_compare_is_identical() {
    let engine = seed_engine();
    let first = engine
        .compare(Category::Gpu, "NVIDIA RTX 4070", "AMD Radeon RX 7800 XT")
        .unwrap();
    let second = engine
        .compare(Category::Gpu, "NVIDIA RTX 4070", "AMD Radeon RX 7800 XT")
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(
        first.comparison[0].raw_index.to_bits(),
        second.comparison[0].raw_index.to_bits()
    );
}

#[test]
fn test_failing_narrator_keeps_deterministic_verdict() {
    let plain = engine_with(reference_rams(), EngineConfig::default_v1());
    let narrated = engine_with(reference_rams(), EngineConfig::default_v1())
        .with_narrator(Box::new(FailingNarrator));
    let a = plain
        .compare(Category::Ram, "Ripjaws 16GB", "Vengeance 32GB")
        .unwrap();
    let b = narrated
        .compare(Category::Ram, "Ripjaws 16GB", "Vengeance 32GB")
        .unwrap();
    assert_eq!(a, b);
    assert!(b.narrative.is_none());
}

#[test]
fn test_template_narrator_annotates_only() {
    let plain = engine_with(reference_rams(), EngineConfig::default_v1());
    let narrated = engine_with(reference_rams(), EngineConfig::default_v1())
        .with_narrator(Box::new(TemplateNarrative::new()));
    let a = plain
        .compare(Category::Ram, "Ripjaws 16GB", "Dominator 64GB")
        .unwrap();
    let b = narrated
        .compare(Category::Ram, "Ripjaws 16GB", "Dominator 64GB")
        .unwrap();
    assert_eq!(a.winner, b.winner);
    assert_eq!(a.reasoning, b.reasoning);
    let text = b.narrative.as_deref().unwrap();
    assert!(text.starts_with("Pick the Dominator 64GB RAM"));
    assert_eq!(b.commentary(), text);
}

#[test]
fn test_rank_seed_population() {
    let engine = seed_engine();
    let ranking = engine.rank(Category::Ram).unwrap();
    assert_eq!(ranking.len(), 4);
    assert_eq!(ranking[0].rank, 1);
    assert!(ranking.windows(2).all(|w| w[0].raw_index >= w[1].raw_index));
}

#[test]
fn test_compare_builds_with_need() {
    let engine = seed_engine();
    let high = BuildSpec {
        name: "High".to_string(),
        cpu: "Intel Core i7-12700K".to_string(),
        gpu: "NVIDIA RTX 4080".to_string(),
        ram: "Corsair Dominator Platinum 64GB DDR5-5600".to_string(),
    };
    let low = BuildSpec {
        name: "Low".to_string(),
        cpu: "Intel Core i5-12400F".to_string(),
        gpu: "NVIDIA RTX 3060".to_string(),
        ram: "G.Skill Ripjaws V 16GB DDR4-3600".to_string(),
    };
    let v = engine
        .compare_builds(&high, &low, Some(Need::Gaming), Need::Gaming.build_weights())
        .unwrap();
    assert_eq!(v.categories.len(), 3);
    assert_eq!(v.categories[0].category, Category::Cpu);
    assert_eq!(v.need, Some(Need::Gaming));

    let expected: f64 = v
        .categories
        .iter()
        .map(|c| v.weights.weight(c.category) * c.comparison[0].raw_index)
        .sum();
    assert!((v.builds[0].raw_index - expected).abs() < 1e-9);
    let (a, b) = (v.builds[0].raw_index, v.builds[1].raw_index);
    if a > b {
        assert_eq!(v.winner.as_str(), "High");
    } else if b > a {
        assert_eq!(v.winner.as_str(), "Low");
    } else {
        assert!(v.winner.is_tie());
    }
}

#[test]
fn test_compare_builds_unknown_part() {
    let engine = seed_engine();
    let good = BuildSpec {
        name: "Good".to_string(),
        cpu: "AMD Ryzen 7 5800X".to_string(),
        gpu: "NVIDIA RTX 4070".to_string(),
        ram: "Corsair Vengeance LPX 32GB DDR4-3200".to_string(),
    };
    let bad = BuildSpec {
        gpu: "Voodoo 3".to_string(),
        ..good.clone()
    };
    let err = engine
        .compare_builds(&good, &bad, None, BuildWeights::balanced())
        .unwrap_err();
    assert_eq!(
        err,
        ScoringError::ComponentNotFound {
            category: Category::Gpu,
            name: "Voodoo 3".to_string(),
        }
    );
}

fn seed_engine() -> ScoringEngine {
    ScoringEngine::new(
        Box::new(seed_repository().unwrap()),
        EngineConfig::default_v1(),
    )
}

#[test]
fn test_compare_builds_rejects_invalid_weights() {
    let engine = seed_engine();
    let build = BuildSpec {
        name: "Any".to_string(),
        cpu: "AMD Ryzen 7 5800X".to_string(),
        gpu: "NVIDIA RTX 4070".to_string(),
        ram: "Corsair Vengeance LPX 32GB DDR4-3200".to_string(),
    };
    for weights in [
        BuildWeights {
            cpu: f64::NAN,
            gpu: 0.5,
            ram: 0.5,
        },
        BuildWeights {
            cpu: 1.0,
            gpu: 0.5,
            ram: 0.5,
        },
    ] {
        let err = engine
            .compare_builds(&build, &build, None, weights)
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidWeights(_)), "{err}");
    }
}
