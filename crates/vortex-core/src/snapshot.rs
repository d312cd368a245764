use crate::config::{ConfigValue, PropertySource};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Serializable view of a property source at one point in time.
///
/// Follows the Spring Cloud Config `propertySources` entry shape, so the
/// JSON output matches what Spring clients expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySourceSnapshot {
    pub name: String,
    pub source: IndexMap<String, ConfigValue>,
}

impl PropertySourceSnapshot {
    /// Captures what `source` exposes right now.
    pub fn capture(source: &dyn PropertySource) -> Self {
        let entries = source
            .property_names()
            .into_iter()
            .filter_map(|key| {
                source
                    .get_property(key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect();

        Self {
            name: source.name().to_string(),
            source: entries,
        }
    }
}
