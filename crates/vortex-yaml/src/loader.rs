//! The profile-aware YAML property source loader.
//!
//! Loading a stream runs in two phases:
//!
//! 1. **Discovery** finds every profile the stream activates, given the
//!    profiles already active (see [`discover_profiles`]).
//! 2. **Selection** matches each document against the sought profile (or
//!    the default profile) and the discovered set, and turns every selected,
//!    non-empty document into a property source.
//!
//! Selected documents are returned later-first, so that a lookup that stops
//! at the first source containing a key sees the last document's value.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};
use vortex_core::{
    ActiveProfiles, CompositePropertySource, MapPropertySource, PropertySource, Result,
    VortexError,
};

use crate::conditional::ActiveProfileConditionalSource;
use crate::discovery::discover_profiles;
use crate::document::YamlDocument;
use crate::matcher::ProfileMatcher;
use crate::naming::{document_name, unique_names};
use crate::profiles::ProfileExpression;
use crate::settings::LoaderSettings;

/// File extensions handled by [`YamlPropertySourceLoader`].
pub const YAML_EXTENSIONS: [&str; 2] = ["yml", "yaml"];

/// A property source built from one selected document.
#[derive(Debug)]
pub struct DocumentSource {
    profiles: ProfileExpression,
    source: Box<dyn PropertySource>,
}

impl DocumentSource {
    pub fn name(&self) -> &str {
        self.source.name()
    }

    /// The profiles the document declared.
    pub fn profiles(&self) -> &ProfileExpression {
        &self.profiles
    }

    pub fn source(&self) -> &dyn PropertySource {
        self.source.as_ref()
    }

    pub fn into_source(self) -> Box<dyn PropertySource> {
        self.source
    }
}

/// The result of loading one YAML stream.
#[derive(Debug, Default)]
pub struct DocumentSources {
    sources: Vec<DocumentSource>,
    active_profiles: Vec<String>,
}

impl DocumentSources {
    /// Selected documents, later documents first. Names are unique.
    pub fn sources(&self) -> &[DocumentSource] {
        &self.sources
    }

    /// The active profiles after discovery, in activation order.
    pub fn active_profiles(&self) -> &[String] {
        &self.active_profiles
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Keeps only the documents that declare at least one positive profile.
    pub fn profile_specific(mut self) -> Self {
        self.sources
            .retain(|document| !document.profiles().positive().is_empty());
        self
    }

    /// Combines the documents into one source named `name`.
    ///
    /// No document yields `None`; a single document is renamed; several are
    /// wrapped, in order, in a [`CompositePropertySource`].
    pub fn into_property_source(self, name: &str) -> Option<Box<dyn PropertySource>> {
        let mut sources = self.sources;
        match sources.len() {
            0 => None,
            1 => sources.pop().map(|document| document.source.renamed(name)),
            _ => {
                let mut composite = CompositePropertySource::new(name);
                for document in sources {
                    composite.add_property_source(document.source);
                }
                Some(Box::new(composite))
            }
        }
    }
}

/// Loads YAML streams into property sources, one per selected document.
///
/// The loader reads the active profiles through a shared handle; documents
/// with negated profiles keep that handle and re-check it on every read.
#[derive(Debug, Clone)]
pub struct YamlPropertySourceLoader {
    profiles: Arc<dyn ActiveProfiles>,
    settings: LoaderSettings,
}

impl YamlPropertySourceLoader {
    /// Creates a loader with default settings.
    pub fn new(profiles: Arc<dyn ActiveProfiles>) -> Self {
        Self::with_settings(profiles, LoaderSettings::default())
    }

    pub fn with_settings(profiles: Arc<dyn ActiveProfiles>, settings: LoaderSettings) -> Self {
        Self { profiles, settings }
    }

    pub fn settings(&self) -> &LoaderSettings {
        &self.settings
    }

    /// Extensions this loader can handle.
    pub fn file_extensions(&self) -> &'static [&'static str] {
        &YAML_EXTENSIONS
    }

    /// Returns true if `path` has a YAML extension.
    pub fn supports(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                YAML_EXTENSIONS
                    .iter()
                    .any(|yaml| yaml.eq_ignore_ascii_case(extension))
            })
    }

    /// Fails with [`VortexError::NotApplicable`] unless `path` has a YAML
    /// extension.
    pub fn require_applicable(&self, path: &Path) -> Result<()> {
        if self.supports(path) {
            Ok(())
        } else {
            Err(VortexError::not_applicable(
                path.display().to_string(),
                format!("expected one of the extensions {:?}", YAML_EXTENSIONS),
            ))
        }
    }

    /// Loads `content` as one property source named `name`.
    ///
    /// `profile` selects the documents of one profile; `None` selects the
    /// default documents. Returns `None` when no document is selected.
    pub fn load(
        &self,
        name: &str,
        content: &str,
        profile: Option<&str>,
    ) -> Result<Option<Box<dyn PropertySource>>> {
        Ok(self
            .load_documents(name, content, profile)?
            .into_property_source(name))
    }

    /// Loads `content` and returns one source per selected document, along
    /// with the profiles discovery activated.
    ///
    /// Fails on malformed YAML, on duplicate keys and on a blank `profile`.
    pub fn load_documents(
        &self,
        name: &str,
        content: &str,
        profile: Option<&str>,
    ) -> Result<DocumentSources> {
        let documents = YamlDocument::parse_all(name, content)?;
        let discovered = discover_profiles(&documents, profile, self.profiles.active_profiles());
        let active = discovered.into_active();

        let matcher = match profile {
            Some(profile) => ProfileMatcher::for_specific_profile(profile, active.iter().cloned())?,
            None => ProfileMatcher::for_default_profile(active.iter().cloned()),
        };

        let mut selected = Vec::new();
        for document in &documents {
            if !matcher.matches(document.profiles()).is_found() {
                continue;
            }
            if document.properties().is_empty() {
                trace!("Skipping document {} of '{}': no properties", document.index(), name);
                continue;
            }
            selected.push(document);
        }
        selected.reverse();

        let names: Vec<String> = selected
            .iter()
            .map(|document| {
                document_name(
                    &self.settings.source_name_prefix,
                    &self.settings.default_document_label,
                    document.profiles(),
                )
            })
            .collect();

        let sources: Vec<DocumentSource> = selected
            .into_iter()
            .zip(unique_names(&names))
            .map(|(document, name)| self.document_source(document, name))
            .collect();

        debug!(
            "Loaded '{}' (profile: {:?}): {} of {} documents selected, active profiles {:?}",
            name,
            profile,
            sources.len(),
            documents.len(),
            active
        );

        Ok(DocumentSources {
            sources,
            active_profiles: active.into_iter().collect(),
        })
    }

    /// Reads and loads a file; the file name becomes the source name.
    ///
    /// Returns `Ok(None)` without reading when the extension is not a YAML
    /// one.
    pub fn load_file(
        &self,
        path: &Path,
        profile: Option<&str>,
    ) -> Result<Option<Box<dyn PropertySource>>> {
        if !self.supports(path) {
            debug!("Not a YAML file: {}", path.display());
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        self.load(&source_name(path), &content, profile)
    }

    fn document_source(&self, document: &YamlDocument, name: String) -> DocumentSource {
        debug!(
            "Selected document {} as '{}' ({} keys)",
            document.index(),
            name,
            document.properties().len()
        );
        let profiles = document.profiles().clone();
        let map = MapPropertySource::shared(name, Arc::clone(document.properties()));

        let source: Box<dyn PropertySource> = if profiles.negative().is_empty() {
            Box::new(map)
        } else {
            Box::new(ActiveProfileConditionalSource::new(
                map,
                profiles.negative().iter().cloned(),
                Arc::clone(&self.profiles),
            ))
        };

        DocumentSource { profiles, source }
    }
}

/// Name of a file-backed source: the file name, or the whole path if it has
/// none.
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|file_name| file_name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
