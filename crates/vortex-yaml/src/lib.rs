//! # Vortex YAML
//!
//! Profile-aware YAML property source loader for Vortex Config.
//!
//! A YAML file may hold several `---`-separated documents, each restricted
//! to a set of profiles with `spring.profiles`. This crate flattens the
//! documents into dotted keys, works out which profiles the file itself
//! activates, and returns the documents that apply as named property
//! sources.
//!
//! ## Features
//!
//! - Profile expressions with negation (`spring.profiles: dev,!cloud`)
//! - `spring.profiles.active` and `spring.profiles.include`, resolved to a
//!   fixed point across documents
//! - Negated documents that hide themselves when a profile is activated
//!   after loading
//! - Duplicate key detection
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use vortex_yaml::{SharedActiveProfiles, YamlPropertySourceLoader};
//!
//! let yaml = "
//! server.port: 8080
//! ---
//! spring.profiles: dev
//! server.port: 9090
//! ";
//!
//! let profiles = SharedActiveProfiles::new(["dev"]);
//! let loader = YamlPropertySourceLoader::new(Arc::new(profiles));
//!
//! let source = loader.load("application.yml", yaml, Some("dev"))?.unwrap();
//! assert_eq!(source.get_property("server.port").and_then(|v| v.as_i64()), Some(9090));
//! # Ok::<(), vortex_yaml::VortexError>(())
//! ```

pub mod conditional;
pub mod discovery;
pub mod document;
pub mod environment;
pub mod flatten;
pub mod loader;
pub mod matcher;
pub mod naming;
pub mod profiles;
pub mod reader;
pub mod settings;

// Re-exports
pub use conditional::ActiveProfileConditionalSource;
pub use discovery::{DiscoveredProfiles, discover_profiles};
pub use document::YamlDocument;
pub use environment::ProfileEnvironment;
pub use flatten::flatten;
pub use loader::{DocumentSource, DocumentSources, YAML_EXTENSIONS, YamlPropertySourceLoader};
pub use matcher::{MatchStatus, ProfileMatcher};
pub use profiles::{ProfileDeclarations, ProfileExpression};
pub use reader::{YamlNode, read_documents};
pub use settings::LoaderSettings;

pub use vortex_core::{
    ActiveProfiles, PropertySource, Result, SharedActiveProfiles, VortexError,
};

// Re-export vortex_core for consumers
pub use vortex_core;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
