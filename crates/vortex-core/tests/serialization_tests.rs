use vortex_core::{ConfigMap, ConfigValue, MapPropertySource, PropertySourceSnapshot};

mod common;

#[test]
fn test_json_roundtrip_preserves_order_and_types() {
    let original = common::flat_config();
    let json = serde_json::to_string_pretty(&original).unwrap();
    let parsed: ConfigMap = serde_json::from_str(&json).unwrap();

    assert_eq!(original, parsed);
    assert_eq!(
        parsed.keys().collect::<Vec<_>>(),
        vec![
            "server.port",
            "server.host",
            "server.ssl.enabled",
            "database.pool.ratio",
            "features[0]",
            "features[1]",
            "empty",
        ]
    );
    assert_eq!(parsed.get("server.ssl.enabled"), Some(&ConfigValue::Bool(true)));
    assert_eq!(parsed.get("database.pool.ratio").and_then(|v| v.as_f64()), Some(0.75));
}

#[test]
fn test_special_characters_preservation() {
    let json = r#"{
        "msg": "Hello\nWorld",
        "path": "C:\\Windows\\System32",
        "unicode": "ñandú 🚀"
    }"#;
    let config: ConfigMap = serde_json::from_str(json).unwrap();

    assert_eq!(config.get("msg").and_then(|v| v.as_str()), Some("Hello\nWorld"));
    assert_eq!(config.get("path").and_then(|v| v.as_str()), Some("C:\\Windows\\System32"));
    assert_eq!(config.get("unicode").and_then(|v| v.as_str()), Some("ñandú 🚀"));
}

#[test]
fn test_snapshot_json_shape() {
    let source = MapPropertySource::new("YAML [dev]", common::flat_config());
    let snapshot = PropertySourceSnapshot::capture(&source);
    let value = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(value["name"], "YAML [dev]");
    assert_eq!(value["source"]["server.port"], 8080);
    assert_eq!(value["source"]["features[0]"], "new-ui");
    assert!(value["source"]["empty"].is_null());
}

#[test]
fn test_snapshot_roundtrip() {
    let source = MapPropertySource::new("YAML [dev]", common::flat_config());
    let snapshot = PropertySourceSnapshot::capture(&source);

    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: PropertySourceSnapshot = serde_json::from_str(&json).unwrap();

    assert_eq!(snapshot, parsed);
}
