/*
[INPUT]:  Error sources (HTTP, exchange envelope, serialization, params)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the inverse adapter
#[derive(Error, Debug)]
pub enum InverseError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("API error (code {code}): {message}")]
    Api { code: i32, message: String },

    /// Envelope carried a non-zero ret_code
    #[error("Exchange rejected request (ret_code {ret_code}): {ret_msg}")]
    Exchange { ret_code: i64, ret_msg: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request parameters rejected before sending
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },

    /// Connection timeout
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

/// ret_codes the exchange uses for key, signature and timestamp failures
const AUTH_RET_CODES: &[i64] = &[10003, 10004, 10005, 10007, 10010, 33004];

impl InverseError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            InverseError::Http(_)
                | InverseError::RateLimit { .. }
                | InverseError::Timeout { .. }
                | InverseError::InvalidResponse(_)
        )
    }

    /// Get retry delay in seconds (if retryable)
    pub fn retry_delay(&self) -> Option<u64> {
        match self {
            InverseError::RateLimit { retry_after } => Some(*retry_after),
            InverseError::Timeout { .. } => Some(1),
            _ => None,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            InverseError::Api { code, .. } => *code == 401 || *code == 403,
            InverseError::Exchange { ret_code, .. } => AUTH_RET_CODES.contains(ret_code),
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        InverseError::Api {
            code: status.as_u16() as i32,
            message: message.into(),
        }
    }
}

/// Result type alias for inverse adapter operations
pub type Result<T> = std::result::Result<T, InverseError>;
