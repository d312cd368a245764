//! Reading the reserved `spring.profiles*` keys out of a flattened document.
//!
//! A declaration can be written as a comma-separated scalar
//! (`spring.profiles: dev,!cloud`) or as a YAML sequence, which the
//! flattener turns into `spring.profiles[0]`, `spring.profiles[1]`, ...
//! Both forms bind to the same ordered token list.

use vortex_core::ConfigMap;

use super::expression::{ProfileExpression, split_list};

/// Per-document applicability expression.
pub const PROFILES_KEY: &str = "spring.profiles";
/// Profiles activated by the document.
pub const ACTIVE_PROFILES_KEY: &str = "spring.profiles.active";
/// Profiles added on top of whatever is already active.
pub const INCLUDE_PROFILES_KEY: &str = "spring.profiles.include";
/// Marker for negated profiles. Never produced by this crate, but
/// suppressed from output so it cannot leak in from a document either.
pub const NEGATED_PROFILES_KEY: &str = "spring.profiles._negated";

const RESERVED_KEYS: [&str; 4] = [
    PROFILES_KEY,
    ACTIVE_PROFILES_KEY,
    INCLUDE_PROFILES_KEY,
    NEGATED_PROFILES_KEY,
];

/// Returns true for the reserved profile keys, in scalar or indexed form.
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS.iter().any(|reserved| {
        key.strip_prefix(reserved)
            .is_some_and(|rest| rest.is_empty() || is_index_suffix(rest))
    })
}

fn is_index_suffix(rest: &str) -> bool {
    rest.strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// The profile declarations found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDeclarations {
    /// Which profiles the document applies to.
    pub applies_to: ProfileExpression,
    /// `spring.profiles.active`, in declaration order.
    pub active: Vec<String>,
    /// `spring.profiles.include`, in declaration order.
    pub include: Vec<String>,
}

impl ProfileDeclarations {
    /// Binds the reserved keys of a flattened document.
    pub fn bind(properties: &ConfigMap) -> Self {
        let applies_to = match bind_list(properties, PROFILES_KEY) {
            Some(bound) => ProfileExpression::from_tokens(bound.tokens).with_raw(bound.raw),
            None => ProfileExpression::none(),
        };

        Self {
            applies_to,
            active: bind_tokens(properties, ACTIVE_PROFILES_KEY),
            include: bind_tokens(properties, INCLUDE_PROFILES_KEY),
        }
    }
}

struct BoundList {
    tokens: Vec<String>,
    raw: String,
}

fn bind_tokens(properties: &ConfigMap, key: &str) -> Vec<String> {
    bind_list(properties, key)
        .map(|bound| bound.tokens)
        .unwrap_or_default()
}

fn bind_list(properties: &ConfigMap, key: &str) -> Option<BoundList> {
    if let Some(value) = properties.get(key) {
        let raw = value.to_string();
        return Some(BoundList {
            tokens: split_list(&raw),
            raw,
        });
    }

    let mut tokens = Vec::new();
    let mut index = 0;
    while let Some(value) = properties.get(&format!("{}[{}]", key, index)) {
        let token = value.to_string();
        let token = token.trim();
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
        index += 1;
    }

    if index == 0 {
        return None;
    }
    Some(BoundList {
        raw: tokens.join(","),
        tokens,
    })
}
