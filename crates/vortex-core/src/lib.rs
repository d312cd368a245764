//! Vortex Core - Domain types and traits
//!
//! This crate provides the foundational types shared by Vortex property
//! source loaders: scalar values, flat ordered property maps, the
//! [`PropertySource`] abstraction and the live active-profile handle.

pub mod config;
pub mod error;
pub mod profiles;
pub mod snapshot;

pub use config::{CompositePropertySource, ConfigMap, ConfigValue, MapPropertySource, PropertySource};
pub use error::{Result, VortexError};
pub use profiles::{ActiveProfiles, SharedActiveProfiles};
pub use snapshot::PropertySourceSnapshot;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
