//! Splitting a YAML stream into document trees.
//!
//! Documents are read into [`YamlNode`] rather than `serde_yaml::Value`
//! because `Value` rejects repeated mapping keys with an opaque message;
//! keeping every entry lets the flattener report a proper duplicate key
//! error with the full property path.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use tracing::trace;
use vortex_core::{Result, VortexError};

/// One node of a parsed YAML document.
///
/// Scalars use plain YAML 1.2 core resolution: timestamps are never
/// recognised and stay strings. Mapping entries are kept in encounter order
/// and may contain repeated keys.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNode {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<YamlNode>),
    Mapping(Vec<(YamlNode, YamlNode)>),
}

impl YamlNode {
    /// Returns true for scalar nodes (including null).
    pub fn is_scalar(&self) -> bool {
        !matches!(self, YamlNode::Sequence(_) | YamlNode::Mapping(_))
    }
}

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor)
    }
}

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = YamlNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any YAML value")
    }

    fn visit_bool<E>(self, v: bool) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::Integer(v))
    }

    fn visit_u64<E>(self, v: u64) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        // Too large for i64: keep the digits rather than lose precision.
        Ok(i64::try_from(v)
            .map(YamlNode::Integer)
            .unwrap_or_else(|_| YamlNode::String(v.to_string())))
    }

    fn visit_i128<E>(self, v: i128) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(i64::try_from(v)
            .map(YamlNode::Integer)
            .unwrap_or_else(|_| YamlNode::String(v.to_string())))
    }

    fn visit_u128<E>(self, v: u128) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(i64::try_from(v)
            .map(YamlNode::Integer)
            .unwrap_or_else(|_| YamlNode::String(v.to_string())))
    }

    fn visit_f64<E>(self, v: f64) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::String(v))
    }

    fn visit_unit<E>(self) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::Null)
    }

    fn visit_none<E>(self) -> std::result::Result<YamlNode, E>
    where
        E: de::Error,
    {
        Ok(YamlNode::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<YamlNode, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        YamlNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<YamlNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<YamlNode>()? {
            items.push(item);
        }
        Ok(YamlNode::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<YamlNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<YamlNode, YamlNode>()? {
            entries.push(entry);
        }
        Ok(YamlNode::Mapping(entries))
    }

    // Explicitly tagged nodes (`!secret abc`) keep their untagged value.
    fn visit_enum<A>(self, data: A) -> std::result::Result<YamlNode, A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (_tag, variant) = data.variant::<String>()?;
        variant.newtype_variant::<YamlNode>()
    }
}

/// Reads every `---`-delimited document of `content`.
///
/// Empty documents (no content, or an explicit `~`) are skipped. Any syntax
/// error aborts the whole read.
pub fn read_documents(source_name: &str, content: &str) -> Result<Vec<YamlNode>> {
    let mut documents = Vec::new();

    if content.trim().is_empty() {
        return Ok(documents);
    }

    for (index, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let node = YamlNode::deserialize(document).map_err(|e| {
            VortexError::parse_error_with_cause(source_name, e.to_string(), e)
        })?;

        if node == YamlNode::Null {
            trace!("Skipping empty document #{} in {}", index, source_name);
            continue;
        }
        documents.push(node);
    }

    Ok(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string(s: &str) -> YamlNode {
        YamlNode::String(s.to_string())
    }

    #[test]
    fn test_read_multiple_documents() {
        let yaml = "a: 1\n---\nb: two\n---\nc: [true, 1.5]\n";
        let docs = read_documents("test.yml", yaml).unwrap();

        assert_eq!(docs.len(), 3);
        assert_eq!(
            docs[0],
            YamlNode::Mapping(vec![(string("a"), YamlNode::Integer(1))])
        );
        assert_eq!(
            docs[2],
            YamlNode::Mapping(vec![(
                string("c"),
                YamlNode::Sequence(vec![YamlNode::Bool(true), YamlNode::Float(1.5)])
            )])
        );
    }

    #[test]
    fn test_empty_documents_are_skipped() {
        let yaml = "---\n---\nkey: value\n---\n~\n";
        let docs = read_documents("test.yml", yaml).unwrap();

        assert_eq!(docs.len(), 1);
        assert!(read_documents("test.yml", "").unwrap().is_empty());
        assert!(read_documents("test.yml", "  \n").unwrap().is_empty());
    }

    #[test]
    fn test_timestamps_stay_strings() {
        let docs = read_documents("test.yml", "released: 2017-03-01T10:15:30Z\n").unwrap();

        assert_eq!(
            docs[0],
            YamlNode::Mapping(vec![(string("released"), string("2017-03-01T10:15:30Z"))])
        );
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let docs = read_documents("test.yml", "name: a\nname: b\n").unwrap();

        match &docs[0] {
            YamlNode::Mapping(entries) => assert_eq!(entries.len(), 2),
            other => panic!("Expected mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_tagged_value_is_untagged() {
        let docs = read_documents("test.yml", "password: !secret hunter2\n").unwrap();

        assert_eq!(
            docs[0],
            YamlNode::Mapping(vec![(string("password"), string("hunter2"))])
        );
    }

    #[test]
    fn test_integers_beyond_i64_keep_their_digits() {
        let yaml = "n: 20000000000000000000000\nm: -20000000000000000000000\nu: 18446744073709551615\nsmall: -42\n";
        let docs = read_documents("test.yml", yaml).unwrap();

        assert_eq!(
            docs[0],
            YamlNode::Mapping(vec![
                (string("n"), string("20000000000000000000000")),
                (string("m"), string("-20000000000000000000000")),
                (string("u"), string("18446744073709551615")),
                (string("small"), YamlNode::Integer(-42)),
            ])
        );
    }

    #[test]
    fn test_invalid_yaml_is_a_parse_error() {
        let err = read_documents("broken.yml", "key: [invalid").unwrap_err();

        assert!(err.is_parse_error());
        assert!(err.to_string().contains("broken.yml"));
    }
}
