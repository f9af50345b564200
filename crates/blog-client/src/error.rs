//! Error types for the blog API client.

use thiserror::Error;

/// Errors returned by `BlogClient`.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a status outside the 2xx range.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body did not match the expected envelope.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
