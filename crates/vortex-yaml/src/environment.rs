//! A layered environment of YAML property sources.
//!
//! [`ProfileEnvironment`] drives the loader the way an application start-up
//! would: it loads the default documents of a file, activates the profiles
//! the file declares, then loads the profile-specific documents of every
//! active profile. Lookups go through the layers in precedence order:
//!
//! 1. profile-specific documents, the last activated profile first;
//! 2. the default documents.
//!
//! Files loaded later take precedence over files loaded earlier.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::debug;
use vortex_core::{
    ActiveProfiles, ConfigValue, PropertySource, PropertySourceSnapshot, Result,
    SharedActiveProfiles,
};

use crate::loader::{YamlPropertySourceLoader, source_name};
use crate::settings::LoaderSettings;

#[derive(Debug)]
pub struct ProfileEnvironment {
    profiles: SharedActiveProfiles,
    loader: YamlPropertySourceLoader,
    sources: Vec<Box<dyn PropertySource>>,
}

impl Default for ProfileEnvironment {
    fn default() -> Self {
        Self::new(SharedActiveProfiles::empty())
    }
}

impl ProfileEnvironment {
    /// Creates an environment over the given profile set, with default
    /// loader settings.
    pub fn new(profiles: SharedActiveProfiles) -> Self {
        Self::with_settings(profiles, LoaderSettings::default())
    }

    pub fn with_settings(profiles: SharedActiveProfiles, settings: LoaderSettings) -> Self {
        let loader = YamlPropertySourceLoader::with_settings(Arc::new(profiles.clone()), settings);
        Self {
            profiles,
            loader,
            sources: Vec::new(),
        }
    }

    /// Creates an environment whose initial profiles come from
    /// `settings.active_profiles`.
    pub fn from_settings(settings: LoaderSettings) -> Self {
        let profiles = SharedActiveProfiles::new(settings.active_profile_list());
        Self::with_settings(profiles, settings)
    }

    /// The shared active profile set. Activating a profile through it
    /// affects sources that were already loaded.
    pub fn profiles(&self) -> &SharedActiveProfiles {
        &self.profiles
    }

    /// Active profiles in activation order.
    pub fn active_profiles(&self) -> Vec<String> {
        self.profiles.active_profiles()
    }

    pub fn loader(&self) -> &YamlPropertySourceLoader {
        &self.loader
    }

    /// Loads one YAML stream.
    ///
    /// On error nothing is added, although profiles activated by the default
    /// documents stay active.
    pub fn load(&mut self, name: &str, content: &str) -> Result<()> {
        let defaults = self.loader.load_documents(name, content, None)?;
        self.profiles.add_all(defaults.active_profiles().iter().cloned());

        let mut layers: Vec<Box<dyn PropertySource>> = Vec::new();
        let mut position = 0;

        // Profile-specific documents may include further profiles, so the
        // list can grow while it is walked.
        while let Some(profile) = self.profiles.active_profiles().get(position).cloned() {
            position += 1;

            let specific = self.loader.load_documents(name, content, Some(&profile))?;
            self.profiles.add_all(specific.active_profiles().iter().cloned());

            let layer_name = format!("{}#{}", name, profile);
            if let Some(layer) = specific.profile_specific().into_property_source(&layer_name) {
                layers.insert(0, layer);
            }
        }

        if let Some(layer) = defaults.into_property_source(name) {
            layers.push(layer);
        }

        debug!(
            "Loaded '{}' as {} layers, active profiles {:?}",
            name,
            layers.len(),
            self.profiles
        );

        layers.append(&mut self.sources);
        self.sources = layers;
        Ok(())
    }

    /// Reads and loads a file. Returns false, without reading, for a file
    /// without a YAML extension.
    pub fn load_file(&mut self, path: &Path) -> Result<bool> {
        if !self.loader.supports(path) {
            return Ok(false);
        }
        let content = std::fs::read_to_string(path)?;
        self.load(&source_name(path), &content)?;
        Ok(true)
    }

    /// Loaded layers, highest precedence first.
    pub fn property_sources(&self) -> &[Box<dyn PropertySource>] {
        &self.sources
    }

    pub fn get_property(&self, key: &str) -> Option<&ConfigValue> {
        self.sources
            .iter()
            .find_map(|source| source.get_property(key))
    }

    pub fn contains_property(&self, key: &str) -> bool {
        self.get_property(key).is_some()
    }

    /// Every visible key, each once, in precedence order.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names = IndexSet::new();
        for source in &self.sources {
            names.extend(source.property_names());
        }
        names.into_iter().collect()
    }

    /// Captures what every layer currently exposes.
    pub fn snapshot(&self) -> Vec<PropertySourceSnapshot> {
        self.sources
            .iter()
            .map(|source| PropertySourceSnapshot::capture(source.as_ref()))
            .collect()
    }
}
