//! Client error types for API access and local state.

use thiserror::Error;

/// Top-level client error type.
///
/// Transport failures (the request never reached the server, or the response
/// never arrived) are kept distinct from HTTP-level rejections so callers can
/// apply per-action policy.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// HTTP 429; carries the server-supplied message.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Any other non-success response; carries the server-supplied message
    /// when the body had one.
    #[error("Rejected: {0}")]
    Rejected(String),

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("State error: {0}")]
    State(String),
}

impl ClientError {
    /// Message suitable for the `Error: <message>` user surface.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(err) => format!("request failed: {err}"),
            Self::RateLimited(msg) | Self::Rejected(msg) | Self::State(msg) => msg.clone(),
            Self::InvalidUrl(msg) => format!("invalid server URL: {msg}"),
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(value: std::io::Error) -> Self {
        Self::State(value.to_string())
    }
}
