use std::io::Write;

use super::*;
use crate::model::{Direction, TermPolicy};

#[test]
fn test_default_config_validates() {
    let config = EngineConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.scale_mode, ScaleMode::Population);
    assert_eq!(config.profile(Category::Gpu).category, Category::Gpu);
}

#[test]
fn test_weight_sum_checked() {
    let mut config = EngineConfig::default_v1();
    config.cpu.terms[0].weight = 0.5;
    match config.validate() {
        Err(ConfigError::WeightSum { table, sum }) => {
            assert_eq!(table, "CPU");
            assert!((sum - 1.25).abs() < 1e-9);
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_negative_weight_rejected() {
    let mut config = EngineConfig::default_v1();
    config.ram.terms[2].weight = -0.1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidWeight { .. })
    ));
}

#[test]
fn test_kind_mismatch_rejected() {
    let profile = ScoringProfile {
        category: Category::Gpu,
        terms: vec![TermPolicy::scaled(
            "ray_tracing",
            "ray_tracing_support",
            Direction::Higher,
            1.0,
        )],
    };
    let err = validate_profile(Category::Gpu, &profile).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::KindMismatch {
            found: AttributeType::Flag,
            ..
        }
    ));
}

#[test]
fn test_unknown_attribute_rejected() {
    let profile = ScoringProfile {
        category: Category::Ram,
        terms: vec![TermPolicy::scaled("latency", "cas_latency", Direction::Lower, 1.0)],
    };
    assert!(matches!(
        validate_profile(Category::Ram, &profile),
        Err(ConfigError::UnknownAttribute { .. })
    ));
}

#[test]
fn test_profile_in_wrong_slot_rejected() {
    let mut config = EngineConfig::default_v1();
    config.gpu = ScoringProfile::cpu_v1();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::CategoryMismatch {
            slot: Category::Gpu,
            category: Category::Cpu
        })
    ));
}

#[test]
fn test_empty_profile_rejected() {
    let profile = ScoringProfile {
        category: Category::Cpu,
        terms: vec![],
    };
    assert!(matches!(
        validate_profile(Category::Cpu, &profile),
        Err(ConfigError::EmptyProfile { .. })
    ));
}

#[test]
fn test_build_weights_sum_checked() {
    let weights = BuildWeights {
        cpu: 0.5,
        gpu: 0.5,
        ram: 0.5,
    };
    assert!(matches!(
        validate_build_weights("build", &weights),
        Err(ConfigError::WeightSum { .. })
    ));
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config =
        parse_config(r#"{"scale_mode":"pairwise","build":{"cpu":0.5,"gpu":0.25,"ram":0.25}}"#)
            .unwrap();
    assert_eq!(config.scale_mode, ScaleMode::Pairwise);
    assert_eq!(config.build.cpu, 0.5);
    assert_eq!(config.cpu, ScoringProfile::cpu_v1());
    assert_eq!(config.ram, ScoringProfile::ram_v1());
}

#[test]
fn test_profile_override_from_json() {
    let config = parse_config(
        r#"{"ram":{"category":"ram","terms":[
            {"term":"size","attribute":"size_gb","kind":"scaled","direction":"higher","weight":0.7},
            {"term":"speed","attribute":"speed_mhz","kind":"scaled","direction":"higher","weight":0.3}
        ]}}"#,
    )
    .unwrap();
    assert_eq!(config.ram.terms.len(), 2);
    assert_eq!(config.ram.scaled_attributes(), vec!["size_gb", "speed_mhz"]);
}

#[test]
fn test_invalid_json_is_parse_error() {
    assert!(matches!(
        parse_config("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_ordinal_level_out_of_range() {
    let err = parse_config(
        r#"{"ram":{"category":"ram","terms":[
            {"term":"type","attribute":"type","kind":"ordinal","table":{"DDR5":120},"weight":1.0}
        ]}}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::OrdinalOutOfRange { .. }));
}

#[test]
fn test_load_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"scale_mode":"population"}"#).unwrap();
    let config = load_config(file.path()).unwrap();
    assert_eq!(config, EngineConfig::default_v1());

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_config(&dir.path().join("missing.json")),
        Err(ConfigError::Io { .. })
    ));
}

#[test]
fn test_ordinal_labels_differing_only_by_case_rejected() {
    let err = parse_config(
        r#"{"ram":{"category":"ram","terms":[
            {"term":"type","attribute":"type","kind":"ordinal",
             "table":{"ddr4":90.0,"DDR4":50.0},"weight":1.0}
        ]}}"#,
    )
    .unwrap_err();
    match err {
        ConfigError::DuplicateOrdinalLabel { term, label } => {
            assert_eq!(term, "type");
            assert_eq!(label, "ddr4");
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn test_ordinal_labels_normalized_on_load() {
    let config = parse_config(
        r#"{"ram":{"category":"ram","terms":[
            {"term":"type","attribute":"type","kind":"ordinal",
             "table":{"ddr4":40.0," Ddr5 ":100.0},"weight":1.0}
        ]}}"#,
    )
    .unwrap();
    match &config.ram.terms[0].kind {
        TermKind::Ordinal { table } => {
            assert_eq!(table.score("DDR4"), 40.0);
            assert_eq!(table.score("ddr5"), 100.0);
            let labels: Vec<&str> = table.levels().map(|(label, _)| label).collect();
            assert_eq!(labels, vec!["DDR4", "DDR5"]);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}
