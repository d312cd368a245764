//! Error types for Vortex Config.
//!
//! This module defines the error hierarchy used when building property
//! sources. All errors implement the standard `std::error::Error` trait
//! via `thiserror`.
//!
//! # Error Handling Philosophy
//!
//! - Functions that can fail return `Result<T, VortexError>`
//! - A failed load never yields a partial property source
//! - "Nothing matched" is an empty result, not an error
//!
//! # Example
//!
//! ```
//! use vortex_core::{Result, VortexError};
//!
//! fn seek_profile(profile: &str) -> Result<String> {
//!     if profile.trim().is_empty() {
//!         return Err(VortexError::invalid_argument(
//!             profile,
//!             "cannot seek null/empty/blank profile",
//!         ));
//!     }
//!     Ok(format!("YAML [{}]", profile))
//! }
//!
//! assert!(seek_profile("dev").is_ok());
//! assert!(seek_profile("  ").unwrap_err().is_invalid_argument());
//! ```

use std::io;
use thiserror::Error;

/// Main error type for Vortex Config operations.
///
/// Each variant includes enough context to point at the offending
/// resource or argument.
#[derive(Debug, Error)]
pub enum VortexError {
    /// Error parsing configuration content.
    #[error("Failed to parse configuration from '{source_name}': {message}")]
    ParseError {
        /// Source of the configuration (filename, URL, etc.)
        source_name: String,
        /// Description of the parse error
        message: String,
        /// Underlying error, if any
        #[source]
        cause: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The same key appears twice within one mapping level.
    #[error("Duplicate key '{key}' in configuration from '{source_name}'")]
    DuplicateKey {
        /// Source of the configuration
        source_name: String,
        /// Full dotted path of the repeated key
        key: String,
    },

    /// An argument passed to a loader or matcher is unusable.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument {
        /// The rejected value
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// The resource is not something this loader handles.
    #[error("Loader not applicable to '{resource}': {reason}")]
    NotApplicable {
        /// The resource that was offered
        resource: String,
        /// Why the loader declined it
        reason: String,
    },

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl VortexError {
    // ============================================
    // Convenience constructors
    // ============================================

    /// Creates a ParseError without a cause.
    pub fn parse_error(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a ParseError with a cause.
    pub fn parse_error_with_cause<E>(
        source: impl Into<String>,
        message: impl Into<String>,
        cause: E,
    ) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ParseError {
            source_name: source.into(),
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Creates a DuplicateKey error.
    ///
    /// # Example
    ///
    /// ```
    /// use vortex_core::VortexError;
    ///
    /// let error = VortexError::duplicate_key("application.yml", "server.port");
    /// assert!(error.is_duplicate_key());
    /// assert!(error.to_string().contains("server.port"));
    /// ```
    pub fn duplicate_key(source: impl Into<String>, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            source_name: source.into(),
            key: key.into(),
        }
    }

    /// Creates an InvalidArgument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a NotApplicable error.
    pub fn not_applicable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::NotApplicable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    // ============================================
    // Query methods
    // ============================================

    /// Returns true if this is a parse error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::ParseError { .. })
    }

    /// Returns true if this is a duplicate key error.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }

    /// Returns true if an argument was rejected.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true if the loader declined the resource.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable { .. })
    }

    /// Returns true if this is an I/O error.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

/// Type alias for Results with VortexError.
pub type Result<T> = std::result::Result<T, VortexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = VortexError::parse_error("application.yml", "did not find expected key");
        let msg = format!("{}", error);

        assert!(msg.contains("application.yml"));
        assert!(msg.contains("did not find expected key"));
        assert!(error.is_parse_error());
    }

    #[test]
    fn test_duplicate_key_display() {
        let error = VortexError::duplicate_key("application.yml", "spring.profiles");

        assert_eq!(
            error.to_string(),
            "Duplicate key 'spring.profiles' in configuration from 'application.yml'"
        );
        assert!(!error.is_parse_error());
    }

    #[test]
    fn test_invalid_argument() {
        let error = VortexError::invalid_argument("", "cannot seek null/empty/blank profile");

        assert!(error.is_invalid_argument());
        assert!(error.to_string().contains("blank profile"));
    }

    #[test]
    fn test_not_applicable() {
        let error = VortexError::not_applicable("app.properties", "unsupported extension");

        assert!(error.is_not_applicable());
        assert!(!error.is_io_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let vortex_error: VortexError = io_error.into();

        assert!(matches!(vortex_error, VortexError::Io(_)));
        assert!(vortex_error.is_io_error());
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad utf-8");
        let parse_error =
            VortexError::parse_error_with_cause("config.yml", "Could not read file", io_error);

        use std::error::Error;
        assert!(parse_error.source().is_some());
    }

    #[test]
    fn test_result_with_question_mark() {
        fn inner() -> Result<()> {
            Err(VortexError::duplicate_key("a.yml", "x"))
        }

        fn outer() -> Result<String> {
            inner()?;
            Ok("success".into())
        }

        assert!(outer().unwrap_err().is_duplicate_key());
    }
}
