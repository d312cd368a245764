use crate::config::source::PropertySource;
use crate::config::value::ConfigValue;
use indexmap::IndexSet;

/// A property source made of other property sources.
///
/// Components are consulted in order: the first component that exposes a
/// key wins. Key enumeration is the ordered union of the component keys.
#[derive(Debug)]
pub struct CompositePropertySource {
    name: String,
    sources: Vec<Box<dyn PropertySource>>,
}

impl CompositePropertySource {
    /// Creates an empty composite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sources: Vec::new(),
        }
    }

    /// Appends a component with lower precedence than the existing ones.
    pub fn add_property_source(&mut self, source: Box<dyn PropertySource>) {
        self.sources.push(source);
    }

    /// Inserts a component with higher precedence than the existing ones.
    pub fn add_first_property_source(&mut self, source: Box<dyn PropertySource>) {
        self.sources.insert(0, source);
    }

    /// Returns the components in precedence order.
    pub fn property_sources(&self) -> &[Box<dyn PropertySource>] {
        &self.sources
    }

    /// Returns the number of components.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns true if there are no components.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl PropertySource for CompositePropertySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_property(&self, key: &str) -> Option<&ConfigValue> {
        self.sources
            .iter()
            .find_map(|source| source.get_property(key))
    }

    fn property_names(&self) -> Vec<&str> {
        let mut names = IndexSet::new();
        for source in &self.sources {
            names.extend(source.property_names());
        }
        names.into_iter().collect()
    }

    fn renamed(&self, name: &str) -> Box<dyn PropertySource> {
        let mut composite = CompositePropertySource::new(name);
        for source in &self.sources {
            composite.add_property_source(source.renamed(source.name()));
        }
        Box::new(composite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigMap, MapPropertySource};

    fn source(name: &str, entries: &[(&str, &str)]) -> Box<dyn PropertySource> {
        let config: ConfigMap = entries.iter().copied().collect();
        Box::new(MapPropertySource::new(name, config))
    }

    #[test]
    fn test_first_component_wins() {
        let mut composite = CompositePropertySource::new("application.yml");
        composite.add_property_source(source("high", &[("key", "high")]));
        composite.add_property_source(source("low", &[("key", "low"), ("only.low", "x")]));

        assert_eq!(composite.get_property("key").unwrap().as_str(), Some("high"));
        assert_eq!(composite.get_property("only.low").unwrap().as_str(), Some("x"));
        assert!(!composite.contains_property("missing"));
    }

    #[test]
    fn test_add_first_takes_precedence() {
        let mut composite = CompositePropertySource::new("c");
        composite.add_property_source(source("base", &[("key", "base")]));
        composite.add_first_property_source(source("overlay", &[("key", "overlay")]));

        assert_eq!(composite.get_property("key").unwrap().as_str(), Some("overlay"));
        assert_eq!(composite.property_sources()[0].name(), "overlay");
    }

    #[test]
    fn test_property_names_are_an_ordered_union() {
        let mut composite = CompositePropertySource::new("c");
        composite.add_property_source(source("a", &[("x", "1"), ("y", "1")]));
        composite.add_property_source(source("b", &[("y", "2"), ("z", "2")]));

        assert_eq!(composite.property_names(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_renamed_keeps_component_names() {
        let mut composite = CompositePropertySource::new("c");
        composite.add_property_source(source("a", &[("x", "1")]));

        let renamed = composite.renamed("d");
        assert_eq!(renamed.name(), "d");
        assert_eq!(renamed.get_property("x").unwrap().as_str(), Some("1"));
    }
}
