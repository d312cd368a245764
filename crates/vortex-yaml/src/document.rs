//! Parsed YAML documents.

use std::sync::Arc;

use vortex_core::{ConfigMap, Result};

use crate::flatten::flatten;
use crate::profiles::{ProfileDeclarations, ProfileExpression, is_reserved_key};
use crate::reader::read_documents;

/// One non-empty `---`-delimited document of a YAML stream.
///
/// Flattening and profile binding happen once, when the stream is parsed;
/// the discovery and selection passes only read the result.
#[derive(Debug, Clone)]
pub struct YamlDocument {
    index: usize,
    declarations: ProfileDeclarations,
    properties: Arc<ConfigMap>,
}

impl YamlDocument {
    /// Parses every document of `content`.
    ///
    /// Fails on malformed YAML and on duplicate keys; in both cases no
    /// document is returned.
    pub fn parse_all(source_name: &str, content: &str) -> Result<Vec<YamlDocument>> {
        read_documents(source_name, content)?
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let mut properties = flatten(source_name, node)?;
                let declarations = ProfileDeclarations::bind(&properties);
                properties.retain(|key| !is_reserved_key(key));

                Ok(YamlDocument {
                    index,
                    declarations,
                    properties: Arc::new(properties),
                })
            })
            .collect()
    }

    /// Position of the document among the non-empty documents of its stream.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The profiles this document applies to.
    pub fn profiles(&self) -> &ProfileExpression {
        &self.declarations.applies_to
    }

    /// Everything the document declares about profiles.
    pub fn declarations(&self) -> &ProfileDeclarations {
        &self.declarations
    }

    /// The flattened properties, without the reserved profile keys.
    pub fn properties(&self) -> &Arc<ConfigMap> {
        &self.properties
    }
}
