//! Error types for the intake engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire intake workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum IntakeError {
    /// A language code that is not a key of the catalog.
    ///
    /// The dispatcher passed a code it did not source from a rendered
    /// language menu. The session is left untouched.
    #[error("Unsupported language code: '{code}'")]
    UnsupportedLanguage { code: String },

    /// An issue index outside the catalog's issue list for the session's
    /// language. The session is left untouched.
    #[error("Issue index {index} out of range ({available} available)")]
    IssueOutOfRange { index: usize, available: usize },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (session store layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntakeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an UnsupportedLanguage error
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { code: code.into() }
    }

    /// Creates an IssueOutOfRange error
    pub fn issue_out_of_range(index: usize, available: usize) -> Self {
        Self::IssueOutOfRange { index, available }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error is a selection the flow machine could not resolve
    /// against the current session's language/catalog.
    ///
    /// The dispatcher uses this to decide whether a generic "please pick from
    /// the menu" retry message is the right response.
    pub fn is_invalid_selection(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedLanguage { .. } | Self::IssueOutOfRange { .. }
        )
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a data access error
    pub fn is_data_access(&self) -> bool {
        matches!(self, Self::DataAccess(_))
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for IntakeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, IntakeError>`.
pub type Result<T> = std::result::Result<T, IntakeError>;
