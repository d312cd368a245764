#![allow(dead_code)]
use vortex_core::{ConfigMap, ConfigValue, MapPropertySource, PropertySource};

/// Helper to create a boxed map source from key/value pairs.
pub fn source<V>(name: &str, entries: &[(&str, V)]) -> Box<dyn PropertySource>
where
    V: Clone + Into<ConfigValue>,
{
    let config: ConfigMap = entries.iter().cloned().collect();
    Box::new(MapPropertySource::new(name, config))
}

/// Returns a flat fixture in the shape the YAML flattener produces.
pub fn flat_config() -> ConfigMap {
    let entries: [(&str, ConfigValue); 7] = [
        ("server.port", 8080.into()),
        ("server.host", "localhost".into()),
        ("server.ssl.enabled", true.into()),
        ("database.pool.ratio", 0.75.into()),
        ("features[0]", "new-ui".into()),
        ("features[1]", "beta-api".into()),
        ("empty", ConfigValue::Null),
    ];
    entries.into_iter().collect()
}
