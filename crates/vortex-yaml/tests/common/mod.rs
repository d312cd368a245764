#![allow(dead_code)]
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vortex_yaml::{
    DocumentSources, ProfileEnvironment, PropertySource, SharedActiveProfiles,
    YamlPropertySourceLoader,
};

/// Routes the loader's tracing output to the test harness. Filter with
/// `RUST_LOG=vortex_yaml=trace`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a loader over a fresh shared profile set, returning both.
pub fn loader(active: &[&str]) -> (YamlPropertySourceLoader, SharedActiveProfiles) {
    init_tracing();
    let profiles = SharedActiveProfiles::new(active.iter().copied());
    let loader = YamlPropertySourceLoader::new(Arc::new(profiles.clone()));
    (loader, profiles)
}

/// Loads `yaml` and panics on error (intended for tests).
pub fn load_documents(active: &[&str], yaml: &str, profile: Option<&str>) -> DocumentSources {
    loader(active)
        .0
        .load_documents("application.yml", yaml, profile)
        .expect("Failed to load test YAML")
}

/// Loads `yaml` into a fresh environment (intended for tests).
pub fn environment(active: &[&str], yaml: &str) -> ProfileEnvironment {
    init_tracing();
    let mut env = ProfileEnvironment::new(SharedActiveProfiles::new(active.iter().copied()));
    env.load("application.yml", yaml)
        .expect("Failed to load test YAML");
    env
}

/// Names of the loaded document sources, in precedence order.
pub fn names(sources: &DocumentSources) -> Vec<String> {
    sources
        .sources()
        .iter()
        .map(|document| document.name().to_string())
        .collect()
}

/// Looks a key up and renders it as a string.
pub fn get(source: &dyn PropertySource, key: &str) -> Option<String> {
    source.get_property(key).map(ToString::to_string)
}

/// Multi-document fixture in the shape of a typical application.yml.
pub const APPLICATION_YML: &str = r#"
spring:
  application:
    name: orders
  profiles:
    active: dev
server:
  port: 8080
---
spring:
  profiles: dev
server:
  port: 9090
logging.level: DEBUG
---
spring:
  profiles: prod
server:
  port: 80
---
spring:
  profiles: "!prod"
feature.debug-endpoints: true
"#;
