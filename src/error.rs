//! Custom error types for student registration
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Field-level validation failures are not
//! errors in this sense; they are reported through
//! [`FieldErrors`](crate::validation::FieldErrors).

use thiserror::Error;

use crate::client::ClientError;

/// The main error type for registration operations
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File and terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Input that cannot be turned into a draft at all
    #[error("Validation error: {0}")]
    Validation(String),

    /// A draft field addressed by a key the section does not have
    #[error("Unknown field '{field}' in {section}")]
    UnknownField {
        section: &'static str,
        field: String,
    },

    /// A list section has no entry at the given position
    #[error("No {section} entry at position {index}")]
    EntryNotFound {
        section: &'static str,
        index: usize,
    },

    /// A submission result arrived with nothing in flight
    #[error("No submission is in flight")]
    NoSubmissionInFlight,

    /// A section was never validated before aggregation
    #[error("Section has not been validated: {0}")]
    IncompleteSection(&'static str),

    /// Errors talking to the registrar backend
    #[error(transparent)]
    Client(#[from] ClientError),
}

impl RegistrationError {
    /// Create an "unknown field" error
    pub fn unknown_field(section: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            section,
            field: field.into(),
        }
    }

    /// Create an "entry not found" error
    pub fn entry_not_found(section: &'static str, index: usize) -> Self {
        Self::EntryNotFound { section, index }
    }
}

impl From<std::io::Error> for RegistrationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RegistrationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for RegistrationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

/// Result type alias for registration operations
pub type RegistrationResult<T> = Result<T, RegistrationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistrationError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_unknown_field_error() {
        let err = RegistrationError::unknown_field("personal info", "middleName");
        assert_eq!(err.to_string(), "Unknown field 'middleName' in personal info");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: RegistrationError = io_err.into();
        assert!(matches!(err, RegistrationError::Io(_)));
    }

    #[test]
    fn test_from_client_error() {
        let err: RegistrationError = ClientError::Timeout.into();
        assert!(matches!(err, RegistrationError::Client(ClientError::Timeout)));
    }
}
