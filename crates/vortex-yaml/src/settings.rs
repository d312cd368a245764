//! Loader settings, read from `VORTEX_YAML_*` environment variables.

use config::{Config, Environment};
use serde::Deserialize;
use vortex_core::{Result, VortexError};

use crate::profiles::split_list;

/// Environment variable prefix for [`LoaderSettings`].
pub const ENV_PREFIX: &str = "VORTEX_YAML";

/// Settings of the YAML loader.
///
/// | Variable                              | Default       |
/// |---------------------------------------|---------------|
/// | `VORTEX_YAML_ACTIVE_PROFILES`         | (none)        |
/// | `VORTEX_YAML_SOURCE_NAME_PREFIX`      | `YAML`        |
/// | `VORTEX_YAML_DEFAULT_DOCUMENT_LABEL`  | `(default)`   |
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    /// Comma-separated profiles active before any file is loaded.
    pub active_profiles: String,
    /// Prefix of the per-document source names.
    pub source_name_prefix: String,
    /// Label of documents that declare no profiles.
    pub default_document_label: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            active_profiles: String::new(),
            source_name_prefix: "YAML".to_string(),
            default_document_label: "(default)".to_string(),
        }
    }
}

impl LoaderSettings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::build(Environment::with_prefix(ENV_PREFIX))
    }

    /// Reads the settings from the given variables instead of the process
    /// environment.
    pub fn from_env_map<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: config::Map<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::build(Environment::with_prefix(ENV_PREFIX).source(Some(vars)))
    }

    fn build(environment: Environment) -> Result<Self> {
        Config::builder()
            .add_source(environment)
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| {
                VortexError::parse_error_with_cause("environment", "invalid loader settings", e)
            })
    }

    /// The initially active profiles, in declared order.
    pub fn active_profile_list(&self) -> Vec<String> {
        split_list(&self.active_profiles)
    }
}
