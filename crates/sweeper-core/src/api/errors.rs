//! API error taxonomy.

use crate::errors::SweeperError;

/// Error from a management-surface call.
///
/// The location loop in the sweep engine keys its tolerance policy off the
/// classification helpers here; everything it does not recognize as
/// transient propagates to the per-kind wrapper.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The surface answered with a non-success HTTP status.
    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never completed (connect, TLS, timeout).
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The response body was not the JSON we expected.
    #[error("Failed to decode API response: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Server-side failures (HTTP 5xx) are treated as transient by the
    /// location loop.
    pub fn is_server_error(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if *status >= 500)
    }

    /// Surfaces reject locations they do not serve with this marker in the
    /// error body.
    pub fn is_unexpected_location(&self) -> bool {
        matches!(self, ApiError::Status { message, .. } if message.contains("Unexpected location"))
    }
}

impl SweeperError for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            ApiError::Status { .. } => "API_STATUS",
            ApiError::Transport { .. } => "API_TRANSPORT",
            ApiError::Decode { .. } => "API_DECODE",
        }
    }
}
