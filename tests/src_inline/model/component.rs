use super::*;

fn ram(name: &str, size_gb: u32, speed_mhz: u32, memory_type: &str) -> Component {
    Component::Ram(Ram {
        name: name.to_string(),
        size_gb,
        speed_mhz,
        memory_type: memory_type.to_string(),
    })
}

#[test]
fn test_category_parse_is_case_insensitive() {
    assert_eq!("CPU".parse::<Category>().unwrap(), Category::Cpu);
    assert_eq!(" gpu ".parse::<Category>().unwrap(), Category::Gpu);
    assert_eq!("Ram".parse::<Category>().unwrap(), Category::Ram);
    assert!("phone".parse::<Category>().is_err());
}

#[test]
fn test_category_display_uses_label() {
    assert_eq!(Category::Cpu.to_string(), "CPU");
    assert_eq!(Category::Ram.key(), "ram");
}

#[test]
fn test_attribute_lookup_by_key() {
    let r = ram("Kit", 32, 3200, "DDR4");
    assert_eq!(r.number("size_gb"), Some(32.0));
    assert_eq!(r.attribute("type"), Some(AttributeValue::Label("DDR4")));
    assert_eq!(r.number("type"), None);
    assert_eq!(r.attribute("vram_gb"), None);
}

#[test]
fn test_attribute_table_matches_accessors() {
    let gpu = Component::Gpu(Gpu {
        name: "Card".to_string(),
        vram_gb: 12.0,
        core_count: 5888,
        core_clock_ghz: 1.92,
        memory_bandwidth_gbps: 504.0,
        architecture: "Ada".to_string(),
        ray_tracing_support: true,
        release_year: 2023,
    });
    for (name, ty) in Category::Gpu.attributes() {
        let value = gpu.attribute(name).unwrap();
        let matches = match (ty, value) {
            (AttributeType::Number, AttributeValue::Number(_)) => true,
            (AttributeType::Flag, AttributeValue::Flag(_)) => true,
            (AttributeType::Label, AttributeValue::Label(_)) => true,
            _ => false,
        };
        assert!(matches, "{name} has the wrong value type");
    }
}

#[test]
fn test_component_json_carries_category_tag() {
    let r = ram("Kit", 16, 3600, "DDR4");
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["category"], "ram");
    assert_eq!(json["type"], "DDR4");
    assert_eq!(json["size_gb"], 16);

    let back: Component = serde_json::from_value(json).unwrap();
    assert_eq!(back, r);
}

#[test]
fn test_cpu_optional_fields_default() {
    let c: Component = serde_json::from_str(
        r#"{"category":"cpu","name":"Chip","clock_speed_ghz":3.7,"core_count":6,
            "thread_count":12,"tdp_watts":65,"ipc":1.0}"#,
    )
    .unwrap();
    assert_eq!(c.category(), Category::Cpu);
    assert_eq!(c.number("cache_size_l3"), Some(0.0));
    assert_eq!(c.attribute("architecture_generation"), Some(AttributeValue::Label("")));
}

#[test]
fn test_non_finite_attributes_reported() {
    let c = Component::Cpu(Cpu {
        name: "Broken".to_string(),
        clock_speed_ghz: f64::NAN,
        core_count: 8,
        thread_count: 16,
        cache_size_l1: 0,
        cache_size_l2: 0,
        cache_size_l3: 0,
        tdp_watts: 105,
        architecture_generation: String::new(),
        ipc: f64::INFINITY,
    });
    assert_eq!(c.non_finite_attributes(), vec!["clock_speed_ghz", "ipc"]);
    assert!(ram("Kit", 8, 2400, "DDR3").non_finite_attributes().is_empty());
}
