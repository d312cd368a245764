//! Flattening of document trees into dotted property keys.

use std::collections::HashSet;

use tracing::warn;
use vortex_core::{ConfigMap, ConfigValue, Result, VortexError};

use crate::reader::YamlNode;

/// Key used for documents whose root is not a mapping.
pub const DOCUMENT_KEY: &str = "document";

/// Flattens a document tree into a single-level ordered map.
///
/// Mapping keys are joined with `.` and sequence items with `[i]`; keys that
/// already start with `[` are appended without a dot. Keys keep the order
/// they were encountered in.
///
/// Leaves follow the usual property conventions: `null` becomes the empty
/// string, an empty sequence becomes the empty string at its own path, and
/// an empty mapping contributes no keys. Non-string mapping keys (`1: x`)
/// are bracketed (`[1]`).
///
/// Fails with [`VortexError::DuplicateKey`] when two equal keys occur in the
/// same mapping. Distinct keys that render to the same property key
/// (`1` and `'[1]'`) are not duplicates: the later value wins, as it does
/// for `a.b` next to `a: {b: ..}`.
///
/// ```text
/// server:                     server.port=8080
///   port: 8080         =>     server.hosts[0]=a
///   hosts: [a, b]             server.hosts[1]=b
/// ```
pub fn flatten(source_name: &str, root: &YamlNode) -> Result<ConfigMap> {
    let mut result = ConfigMap::new();
    match root {
        YamlNode::Null => {},
        YamlNode::Mapping(entries) => flatten_mapping(source_name, "", entries, &mut result)?,
        other => flatten_value(source_name, DOCUMENT_KEY, other, &mut result)?,
    }
    Ok(result)
}

fn flatten_mapping(
    source_name: &str,
    path: &str,
    entries: &[(YamlNode, YamlNode)],
    target: &mut ConfigMap,
) -> Result<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    let mut flat_keys = HashSet::with_capacity(entries.len());

    for (key, value) in entries {
        let text = key_text(source_name, path, key)?;
        let child = join(path, &text);
        // `1` and `'1'` are different YAML keys, `1: a` twice is not.
        if !seen.insert((matches!(key, YamlNode::String(_)), scalar_value(key).to_string())) {
            return Err(VortexError::duplicate_key(source_name, child));
        }
        if !flat_keys.insert(text) {
            warn!(
                "Distinct keys flatten to '{}' in {}; the later entry wins",
                child, source_name
            );
        }
        flatten_value(source_name, &child, value, target)?;
    }

    Ok(())
}

fn flatten_value(
    source_name: &str,
    path: &str,
    value: &YamlNode,
    target: &mut ConfigMap,
) -> Result<()> {
    match value {
        YamlNode::Mapping(entries) => flatten_mapping(source_name, path, entries, target)?,
        YamlNode::Sequence(items) if items.is_empty() => target.insert(path, ""),
        YamlNode::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(source_name, &format!("{}[{}]", path, index), item, target)?;
            }
        },
        scalar => target.insert(path, scalar_value(scalar)),
    }
    Ok(())
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else if key.starts_with('[') {
        format!("{}{}", path, key)
    } else {
        format!("{}.{}", path, key)
    }
}

fn key_text(source_name: &str, path: &str, key: &YamlNode) -> Result<String> {
    match key {
        YamlNode::String(s) => Ok(s.clone()),
        YamlNode::Null => Ok("[null]".to_string()),
        other if other.is_scalar() => Ok(format!("[{}]", scalar_value(other))),
        _ => Err(VortexError::parse_error(
            source_name,
            format!(
                "unsupported mapping key under '{}': keys must be scalars",
                if path.is_empty() { "<root>" } else { path }
            ),
        )),
    }
}

fn scalar_value(node: &YamlNode) -> ConfigValue {
    match node {
        YamlNode::Bool(b) => ConfigValue::Bool(*b),
        YamlNode::Integer(i) => ConfigValue::Integer(*i),
        YamlNode::Float(f) => ConfigValue::from(*f),
        YamlNode::String(s) => ConfigValue::String(s.clone()),
        _ => ConfigValue::String(String::new()),
    }
}
