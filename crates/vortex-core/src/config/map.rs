use crate::config::value::ConfigValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flat, ordered map of property keys to scalar values.
///
/// Keys are already fully qualified (`server.port`, `servers[0].host`);
/// lookups are exact, there is no nested traversal.
///
/// We use `IndexMap` so iteration follows the order in which keys were
/// encountered in the source document. Later documents overriding earlier
/// ones, and the order keys are displayed in, both depend on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigMap {
    #[serde(flatten)]
    inner: IndexMap<String, ConfigValue>,
}

impl ConfigMap {
    /// Creates a new empty configuration map.
    pub fn new() -> Self {
        Self {
            inner: IndexMap::new(),
        }
    }

    /// Creates a ConfigMap from an existing IndexMap.
    pub fn from_inner(inner: IndexMap<String, ConfigValue>) -> Self {
        Self { inner }
    }

    /// Returns a reference to the internal map.
    pub fn as_inner(&self) -> &IndexMap<String, ConfigValue> {
        &self.inner
    }

    /// Returns true if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Re-inserting an existing key replaces the value but keeps the key's
    /// original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.inner.insert(key.into(), value.into());
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.inner.shift_remove(key)
    }

    /// Retrieves a value by its exact key.
    ///
    /// # Example
    /// ```
    /// # use vortex_core::{ConfigMap, ConfigValue};
    /// let mut map = ConfigMap::new();
    /// map.insert("server.port", 8080);
    /// assert_eq!(map.get("server.port"), Some(&ConfigValue::Integer(8080)));
    /// assert_eq!(map.get("server"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        if key.is_empty() {
            return None;
        }
        self.inner.get(key)
    }

    /// Returns true if the exact key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigValue)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keeps only the entries for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.inner.retain(|key, _| keep(key));
    }
}

// Implement From<IndexMap>
impl From<IndexMap<String, ConfigValue>> for ConfigMap {
    fn from(map: IndexMap<String, ConfigValue>) -> Self {
        ConfigMap { inner: map }
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}
