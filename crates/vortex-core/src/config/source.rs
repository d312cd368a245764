use crate::config::map::ConfigMap;
use crate::config::value::ConfigValue;
use std::fmt;
use std::sync::Arc;

/// A named source of configuration properties.
///
/// A property source usually corresponds to a file (e.g., "application.yml")
/// or to one document inside such a file. Implementations decide at read
/// time what they expose, so two reads of the same source may differ when
/// the source depends on live state (see the negation-aware YAML sources).
pub trait PropertySource: fmt::Debug + Send + Sync {
    /// The name of the property source (e.g., "YAML [dev]").
    fn name(&self) -> &str;

    /// Returns the value for an exact key, if this source currently exposes it.
    fn get_property(&self, key: &str) -> Option<&ConfigValue>;

    /// Returns true if this source currently exposes the key.
    fn contains_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }

    /// Returns the keys this source currently exposes, in source order.
    fn property_names(&self) -> Vec<&str>;

    /// Returns a copy of this source under a different name.
    ///
    /// The copy shares the underlying properties and keeps whatever read-time
    /// behaviour the original has.
    fn renamed(&self, name: &str) -> Box<dyn PropertySource>;
}

/// A property source backed by a flat [`ConfigMap`].
///
/// The map is shared, so renaming never copies the properties.
#[derive(Debug, Clone, PartialEq)]
pub struct MapPropertySource {
    name: String,
    source: Arc<ConfigMap>,
}

impl MapPropertySource {
    /// Creates a new MapPropertySource.
    pub fn new(name: impl Into<String>, source: ConfigMap) -> Self {
        Self::shared(name, Arc::new(source))
    }

    /// Creates a MapPropertySource over an already shared map.
    pub fn shared(name: impl Into<String>, source: Arc<ConfigMap>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// Returns the underlying properties, regardless of any read-time filtering
    /// a wrapper might apply.
    pub fn source(&self) -> &Arc<ConfigMap> {
        &self.source
    }

    /// Returns a new MapPropertySource with the same properties and a new name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::shared(name, Arc::clone(&self.source))
    }
}

impl PropertySource for MapPropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_property(&self, key: &str) -> Option<&ConfigValue> {
        self.source.get(key)
    }

    fn property_names(&self) -> Vec<&str> {
        self.source.keys().collect()
    }

    fn renamed(&self, name: &str) -> Box<dyn PropertySource> {
        Box::new(self.with_name(name))
    }
}
