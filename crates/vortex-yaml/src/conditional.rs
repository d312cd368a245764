//! Property sources whose visibility depends on the live active profiles.
//!
//! A document selected while none of its negated profiles was active must
//! disappear if one of them is activated later. The loader therefore wraps
//! such documents in [`ActiveProfileConditionalSource`], which checks the
//! shared profile set on every read instead of at load time.

use std::sync::Arc;

use vortex_core::{ActiveProfiles, ConfigValue, MapPropertySource, PropertySource};

use crate::profiles::ACTIVE_PROFILES_KEY;

/// A document that is visible only while none of its negated profiles is
/// active.
#[derive(Debug, Clone)]
pub struct ActiveProfileConditionalSource {
    inner: MapPropertySource,
    negated: Arc<[String]>,
    profiles: Arc<dyn ActiveProfiles>,
}

impl ActiveProfileConditionalSource {
    pub fn new<I, S>(inner: MapPropertySource, negated: I, profiles: Arc<dyn ActiveProfiles>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner,
            negated: negated.into_iter().map(Into::into).collect(),
            profiles,
        }
    }

    /// The same view under another name. Properties and negated profiles
    /// are shared, not copied.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            inner: self.inner.with_name(name),
            negated: Arc::clone(&self.negated),
            profiles: Arc::clone(&self.profiles),
        }
    }

    pub fn negated_profiles(&self) -> &[String] {
        &self.negated
    }

    /// Returns true while none of the negated profiles is active.
    pub fn is_active(&self) -> bool {
        let active = self.profiles.active_profiles();
        !self.negated.iter().any(|profile| active.contains(profile))
    }

    /// The wrapped source, without the read-time filtering.
    pub fn inner(&self) -> &MapPropertySource {
        &self.inner
    }
}

impl PropertySource for ActiveProfileConditionalSource {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn get_property(&self, key: &str) -> Option<&ConfigValue> {
        if key == ACTIVE_PROFILES_KEY || !self.is_active() {
            return None;
        }
        self.inner.get_property(key)
    }

    fn property_names(&self) -> Vec<&str> {
        if !self.is_active() {
            return Vec::new();
        }
        self.inner
            .property_names()
            .into_iter()
            .filter(|key| *key != ACTIVE_PROFILES_KEY)
            .collect()
    }

    fn renamed(&self, name: &str) -> Box<dyn PropertySource> {
        Box::new(self.with_name(name))
    }
}
