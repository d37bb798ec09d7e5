//! Transport-level error taxonomy shared by every REST wrapper.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

/// Errors produced by API client operations.
///
/// Wrappers never recover from these locally; they propagate to the UI
/// caller, which decides how to surface them.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, timeout).
    #[error("API request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    Parse(String),

    /// Query parameters or the request body could not be serialized.
    #[error("API request encode failed: {0}")]
    Encode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Deserialize)]
struct ServerErrorBody {
    message: Option<String>,
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message supplied by the server in a JSON error body.
    pub fn server_message(&self) -> Option<String> {
        let Self::Status { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ServerErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
    }
}
