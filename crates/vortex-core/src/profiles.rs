//! Active profile state shared between a loader and the sources it produces.

use indexmap::IndexSet;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A live view of the profiles currently active in the surrounding system.
///
/// Every call is a fresh query. Property sources that depend on active
/// profiles hold a handle to this trait and never cache its answer.
pub trait ActiveProfiles: fmt::Debug + Send + Sync {
    /// Returns the active profile names in activation order.
    fn active_profiles(&self) -> Vec<String>;

    /// Returns true if `profile` is currently active.
    fn is_active(&self, profile: &str) -> bool {
        self.active_profiles().iter().any(|p| p == profile)
    }
}

/// Insertion-ordered, duplicate-insensitive set of active profile names that
/// can be shared and mutated after property sources have been built.
///
/// Cloning yields another handle to the same set.
///
/// # Example
///
/// ```
/// use vortex_core::{ActiveProfiles, SharedActiveProfiles};
///
/// let profiles = SharedActiveProfiles::new(["dev"]);
/// let handle = profiles.clone();
/// profiles.add("cloud");
/// assert_eq!(handle.active_profiles(), vec!["dev", "cloud"]);
/// ```
#[derive(Clone, Default)]
pub struct SharedActiveProfiles {
    inner: Arc<RwLock<IndexSet<String>>>,
}

impl SharedActiveProfiles {
    /// Creates a shared set seeded with the given profiles.
    pub fn new<I, S>(profiles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(RwLock::new(profiles.into_iter().map(Into::into).collect())),
        }
    }

    /// Creates an empty shared set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Activates a profile. Returns false if it was already active.
    pub fn add(&self, profile: impl Into<String>) -> bool {
        self.inner.write().insert(profile.into())
    }

    /// Activates several profiles, keeping their order. Returns true if any
    /// of them was new.
    pub fn add_all<I, S>(&self, profiles: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = self.inner.write();
        let before = set.len();
        set.extend(profiles.into_iter().map(Into::into));
        set.len() > before
    }

    /// Deactivates a profile. Returns false if it was not active.
    pub fn remove(&self, profile: &str) -> bool {
        self.inner.write().shift_remove(profile)
    }

    /// Replaces the active profiles.
    pub fn set<I, S>(&self, profiles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = self.inner.write();
        set.clear();
        set.extend(profiles.into_iter().map(Into::into));
    }

    /// Returns true if no profile is active.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl ActiveProfiles for SharedActiveProfiles {
    fn active_profiles(&self) -> Vec<String> {
        self.inner.read().iter().cloned().collect()
    }

    fn is_active(&self, profile: &str) -> bool {
        self.inner.read().contains(profile)
    }
}

impl fmt::Debug for SharedActiveProfiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.read().iter()).finish()
    }
}
