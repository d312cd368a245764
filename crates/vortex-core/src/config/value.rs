use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scalar property value as produced by flattening a YAML document.
///
/// Flattened property sources only ever hold leaves: nested mappings and
/// sequences are expanded into dotted / indexed keys before a value is
/// stored. Timestamps are never resolved, they arrive here as `String`.
///
/// # Example
///
/// ```
/// use vortex_core::ConfigValue;
///
/// let val: ConfigValue = "hello".into();
/// assert_eq!(val.as_str(), Some("hello"));
///
/// let port: ConfigValue = 8080.into();
/// assert_eq!(port.to_string(), "8080");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Null value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value (signed 64-bit)
    Integer(i64),
    /// Floating point value (wrapped in OrderedFloat for Eq support)
    Float(OrderedFloat<f64>),
    /// String value
    String(String),
}

impl ConfigValue {
    /// Returns true if the value is Null.
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    /// Returns the value as a bool if it matches.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an i64 if it matches.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as an f64 if it matches (Integer or Float).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(f.into_inner()),
            ConfigValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Returns the value as a str if it matches.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Renders the value the way it would appear in a `.properties` file.
/// `Null` renders as the empty string.
impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => Ok(()),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            // Keep `1.0` distinguishable from the integer `1`.
            ConfigValue::Float(v) if v.into_inner().fract() == 0.0 => write!(f, "{:?}", v.into_inner()),
            ConfigValue::Float(v) => write!(f, "{}", v.into_inner()),
            ConfigValue::String(s) => f.write_str(s),
        }
    }
}

// ==========================================
// From Conversions for Ergonomics
// ==========================================

impl From<bool> for ConfigValue {
    fn from(v: bool) -> Self {
        ConfigValue::Bool(v)
    }
}

impl From<i64> for ConfigValue {
    fn from(v: i64) -> Self {
        ConfigValue::Integer(v)
    }
}

impl From<i32> for ConfigValue {
    fn from(v: i32) -> Self {
        ConfigValue::Integer(v as i64)
    }
}

impl From<f64> for ConfigValue {
    fn from(v: f64) -> Self {
        ConfigValue::Float(OrderedFloat(v))
    }
}

impl From<String> for ConfigValue {
    fn from(v: String) -> Self {
        ConfigValue::String(v)
    }
}

impl From<&str> for ConfigValue {
    fn from(v: &str) -> Self {
        ConfigValue::String(v.to_string())
    }
}
