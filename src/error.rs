//! Error types for the MorphoSource client.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when interacting with the MorphoSource API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Request could not be constructed
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// The HTTP status code carried by this error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur when classifying a response envelope.
#[derive(Error, Debug)]
pub enum EnvelopeError {
    /// Top-level keys matched neither known envelope shape
    #[error("unrecognized envelope shape: expected a top-level `data` or `response` key, found {0:?}")]
    UnrecognizedShape(Vec<String>),

    /// A record inside the envelope did not have the expected fields
    #[error("malformed record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// The envelope held no record where one was required
    #[error("missing record: {0}")]
    MissingRecord(String),
}

/// Convenience type alias for Results with ApiError
pub type ApiResult<T> = Result<T, ApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("media 12345".to_string());
        assert_eq!(err.to_string(), "Resource not found: media 12345");

        let err = ApiError::Timeout;
        assert_eq!(err.to_string(), "Request timeout");

        let err = ConfigError::InvalidValue {
            var: "MORPHOSOURCE_API_URL".to_string(),
            reason: "Must start with http:// or https://".to_string(),
        };
        assert!(err.to_string().contains("MORPHOSOURCE_API_URL"));
    }

    #[test]
    fn test_status_error_carries_code() {
        let err = ApiError::Status {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert!(err.to_string().contains("500"));
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_status_helper_on_classified_variants() {
        assert_eq!(ApiError::Unauthorized.status(), Some(401));
        assert_eq!(ApiError::NotFound("x".to_string()).status(), Some(404));
        assert_eq!(ApiError::Timeout.status(), None);
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
    }

    #[test]
    fn test_envelope_error_display() {
        let err = EnvelopeError::UnrecognizedShape(vec!["errors".to_string()]);
        assert!(err.to_string().contains("errors"));
        assert!(err.to_string().contains("`data` or `response`"));
    }
}
