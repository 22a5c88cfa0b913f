//! # Openpay Error Types
//!
//! Typed error handling for the Openpay client.
//! All client operations return `Result<T, OpenpayError>`.

use serde::Deserialize;
use thiserror::Error;

/// Boxed error produced by an HTTP transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for all Openpay operations
#[derive(Debug, Error)]
pub enum OpenpayError {
    /// Configuration errors (missing env vars, invalid client IP)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {after_ms} ms")]
    Timeout { after_ms: u64 },

    /// Failure reported by the HTTP transport, kept as-is
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),

    /// Openpay answered with a non-2xx status
    #[error("Openpay API error [{status}]: {}", describe(.error.as_ref(), .body))]
    Api {
        status: u16,
        error: Option<ApiErrorBody>,
        body: String,
    },

    /// Request or response body could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn describe(error: Option<&ApiErrorBody>, body: &str) -> String {
    match error {
        Some(e) => format!("{} (error_code={})", e.description, e.error_code),
        None => body.to_string(),
    }
}

impl OpenpayError {
    /// Wrap a transport's native error without rewriting it.
    pub fn transport(err: impl Into<BoxError>) -> Self {
        OpenpayError::Transport(err.into())
    }

    /// Returns true if this error is retryable.
    ///
    /// The client never retries on its own; this only helps callers decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            OpenpayError::Timeout { .. } | OpenpayError::Transport(_) => true,
            OpenpayError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Returns the HTTP status code associated with this error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            OpenpayError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Openpay's numeric error code, when the error envelope was decodable
    pub fn error_code(&self) -> Option<u32> {
        match self {
            OpenpayError::Api {
                error: Some(body), ..
            } => Some(body.error_code),
            _ => None,
        }
    }
}

/// Error envelope documented by the Openpay API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// `request`, `internal` or `gateway`
    pub category: ErrorCategory,
    pub error_code: u32,
    pub description: String,
    /// Returned as either a string or a number depending on the endpoint
    #[serde(default, deserialize_with = "crate::common::string_or_number")]
    pub http_code: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub fraud_rules: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Request,
    Internal,
    Gateway,
}

/// Result type alias for Openpay operations
pub type OpenpayResult<T> = Result<T, OpenpayError>;
