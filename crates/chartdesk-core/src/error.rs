//! Error types for the Chartdesk application.

use thiserror::Error;

/// Reasons a chart draft can be rejected before any persistence call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The chart title is empty or whitespace-only.
    #[error("chart title must not be empty")]
    EmptyTitle,
}

/// A shared error type for the entire Chartdesk application.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug)]
pub enum ChartdeskError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A draft failed presence validation before persistence
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The email/password pair was rejected by the auth service
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// An operation requiring a session was invoked while logged out
    #[error("Not signed in")]
    NotAuthenticated,

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/remote service layer)
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

impl ChartdeskError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
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

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means the caller must sign in first
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::NotAuthenticated | Self::InvalidCredentials)
    }
}

impl From<std::io::Error> for ChartdeskError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ChartdeskError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ChartdeskError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ChartdeskError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ChartdeskError>`.
pub type Result<T> = std::result::Result<T, ChartdeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_predicate() {
        let err = ChartdeskError::not_found("chart", "abc");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Entity not found: chart 'abc'");
    }

    #[test]
    fn test_validation_from() {
        let err: ChartdeskError = ValidationError::EmptyTitle.into();
        assert!(err.is_validation());
    }

    #[test]
    fn test_auth_predicate() {
        assert!(ChartdeskError::NotAuthenticated.is_auth());
        assert!(ChartdeskError::InvalidCredentials.is_auth());
        assert!(!ChartdeskError::data_access("boom").is_auth());
    }
}
