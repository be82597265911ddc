//! Error types for moto-catalog
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde_json::Value;
use thiserror::Error;

/// Message shown when the backend rejects a write as a duplicate without
/// saying why.
pub const DUPLICATE_MESSAGE: &str = "An entry with these details already exists";

/// The main error type for moto-catalog
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Filter Errors
    // ============================================================================
    #[error("Invalid filter '{field}': {message}")]
    Validation { field: String, message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("HTTP 409: {message}")]
    Duplicate { message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a filter validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a server error for a non-successful status
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Classify a non-successful response.
    ///
    /// The server's own `message` (or `error`) field wins when the body is a
    /// JSON object carrying one; otherwise a generic status message is used.
    pub fn from_response(status: u16, body: &str) -> Self {
        let server_message = extract_server_message(body);

        if status == 409 {
            return Self::Duplicate {
                message: server_message.unwrap_or_else(|| DUPLICATE_MESSAGE.to_string()),
            };
        }

        Self::Server {
            status,
            message: server_message
                .unwrap_or_else(|| format!("server responded with status {status}")),
        }
    }

    /// HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } => Some(*status),
            Error::Duplicate { .. } => Some(409),
            Error::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if a manual retry of the same request could succeed.
    ///
    /// Nothing in the crate retries automatically; callers use this to decide
    /// whether to offer a retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Network(_) | Error::Timeout { .. } => true,
            Error::Server { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
}

fn extract_server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"].iter().find_map(|key| {
        value
            .get(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

/// Result type alias for moto-catalog
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::validation("price", "expected min-max");
        assert_eq!(err.to_string(), "Invalid filter 'price': expected min-max");

        let err = Error::server(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_from_response_uses_server_message() {
        let err = Error::from_response(400, r#"{"message": "brand is unknown"}"#);
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "HTTP 400: brand is unknown");

        let err = Error::from_response(500, r#"{"error": "database offline"}"#);
        assert_eq!(err.to_string(), "HTTP 500: database offline");
    }

    #[test]
    fn test_from_response_generic_message() {
        let err = Error::from_response(502, "<html>bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502: server responded with status 502");

        let err = Error::from_response(404, r#"{"message": "   "}"#);
        assert_eq!(err.to_string(), "HTTP 404: server responded with status 404");
    }

    #[test]
    fn test_from_response_duplicate() {
        let err = Error::from_response(409, "");
        assert!(matches!(err, Error::Duplicate { .. }));
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), format!("HTTP 409: {DUPLICATE_MESSAGE}"));

        let err = Error::from_response(409, r#"{"message": "VIN already registered"}"#);
        assert_eq!(err.to_string(), "HTTP 409: VIN already registered");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::Timeout { timeout_ms: 1000 }.is_retryable());
        assert!(Error::server(429, "").is_retryable());
        assert!(Error::server(500, "").is_retryable());
        assert!(Error::server(503, "").is_retryable());

        assert!(!Error::server(400, "").is_retryable());
        assert!(!Error::server(404, "").is_retryable());
        assert!(!Error::validation("price", "bad").is_retryable());
        assert!(!Error::from_response(409, "").is_retryable());
        assert!(!Error::config("test").is_retryable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
