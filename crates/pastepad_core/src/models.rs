//! Wire models and response envelope decoding for the paste API.
//!
//! Every API payload travels inside an envelope: `{"ok": true, "result": ...}`
//! on success, `{"ok": false, "error": "..."}` on failure. Error strings are
//! machine-flavored (`TOO_FAST`, `DOCUMENT_NOT_FOUND`, `CONTENT_TOO_LONG`).

use crate::error::ClientError;
use serde::{Deserialize, Serialize};

/// A paste document as returned by the server.
///
/// Documents are immutable once created; the client only ever renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub date: i64,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub length: usize,
    pub content: String,
}

/// Request payload for creating a document.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDocumentRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl CreateDocumentRequest {
    /// Content-only request, the common case for the GUI composer.
    pub fn from_content(content: String) -> Self {
        Self {
            content,
            title: None,
            author: None,
        }
    }
}

/// Response envelope wrapping every API payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    /// Tolerate older servers that omit the flag.
    #[serde(default = "default_ok")]
    pub ok: bool,
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

fn default_ok() -> bool {
    true
}

/// Decode a document response body according to its HTTP status.
///
/// # Returns
/// The document on a success status; otherwise `RateLimited` for 429 and
/// `Rejected` for everything else, carrying the best message the body offers.
pub fn decode_document(status: u16, body: &str) -> Result<Document, ClientError> {
    if (200..300).contains(&status) {
        let envelope: Envelope<Document> = serde_json::from_str(body)
            .map_err(|err| ClientError::Rejected(format!("malformed response: {err}")))?;
        envelope
            .result
            .ok_or_else(|| ClientError::Rejected("response missing result".to_string()))
    } else {
        let message = error_message(status, body);
        match status {
            429 => Err(ClientError::RateLimited(message)),
            _ => Err(ClientError::Rejected(message)),
        }
    }
}

/// Best user-facing message for a failure response body.
///
/// Empty bodies fall back to the bare status; JSON bodies contribute their
/// `error` field; anything else is passed through trimmed.
pub fn error_message(status: u16, body: &str) -> String {
    if body.trim().is_empty() {
        return format!("HTTP {status}");
    }
    if let Ok(envelope) = serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        if let Some(error) = envelope.error {
            return error;
        }
    }
    body.trim().to_string()
}
