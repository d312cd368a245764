//! Parsing of `spring.profiles` expressions.

use std::fmt;

/// Marker that negates a profile name.
pub const NEGATION_PREFIX: char = '!';

/// The profiles a document declares it applies to.
///
/// Tokens are either positive (`dev`) or negated (`!dev`). Token order is
/// preserved, but matching treats both lists as sets.
///
/// # Example
///
/// ```
/// use vortex_yaml::ProfileExpression;
///
/// let expr = ProfileExpression::parse("dev, !cloud,local");
/// assert_eq!(expr.positive(), &["dev", "local"]);
/// assert_eq!(expr.negative(), &["cloud"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileExpression {
    positive: Vec<String>,
    negative: Vec<String>,
    raw: Option<String>,
}

impl ProfileExpression {
    /// The expression of a document that declares nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parses a comma-separated expression.
    ///
    /// Tokens are trimmed and blank tokens dropped, so a blank expression
    /// yields no profiles at all.
    pub fn parse(raw: &str) -> Self {
        let mut expr = Self::from_tokens(split_list(raw));
        expr.raw = Some(raw.to_string());
        expr
    }

    /// Builds an expression from already separated tokens.
    ///
    /// Unlike [`parse`](Self::parse), tokens are taken as given (apart from
    /// stripping the negation marker), so a blank token stays a blank
    /// positive profile.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut expr = Self::default();
        for token in tokens {
            let token = token.into();
            match token.strip_prefix(NEGATION_PREFIX) {
                Some(name) => expr.negative.push(name.to_string()),
                None => expr.positive.push(token),
            }
        }
        expr
    }

    /// Attaches the text the expression was declared with.
    pub(crate) fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// Profiles that must be active (any one of them).
    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    /// Profiles that must not be active (none of them).
    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Returns true if the document declared no profile at all.
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Returns the text the expression was declared with, if it was declared.
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl fmt::Display for ProfileExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(raw) = &self.raw {
            return f.write_str(raw);
        }
        let tokens: Vec<String> = self
            .positive
            .iter()
            .cloned()
            .chain(self.negative.iter().map(|p| format!("{}{}", NEGATION_PREFIX, p)))
            .collect();
        f.write_str(&tokens.join(","))
    }
}

/// Splits a comma-separated list, trimming entries and dropping blank ones.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
