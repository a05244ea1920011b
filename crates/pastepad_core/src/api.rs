//! Blocking HTTP client for the paste API.

use crate::constants::REQUEST_TIMEOUT;
use crate::error::ClientError;
use crate::models::{decode_document, CreateDocumentRequest, Document};
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

/// Blocking client bound to one paste server.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Build a client for `server` (scheme + host, trailing slash tolerated).
    ///
    /// # Errors
    /// `InvalidUrl` when the server string does not parse as an absolute URL,
    /// `Transport` when the HTTP client cannot be constructed.
    pub fn new(server: &str) -> Result<Self, ClientError> {
        let base = Url::parse(server.trim_end_matches('/'))
            .map_err(|err| ClientError::InvalidUrl(format!("{server}: {err}")))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{server}: cannot be used as an API base"
            )));
        }
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { http, base })
    }

    /// Base server URL this client is bound to.
    pub fn server(&self) -> &Url {
        &self.base
    }

    fn api_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment);
            }
        }
        url
    }

    /// Fetch a document. `path` names it by key, with an optional display
    /// extension the server strips (`xyz` and `xyz.py` load the same document).
    ///
    /// # Errors
    /// `RateLimited` on HTTP 429, `Rejected` on any other failure status,
    /// `Transport` when the request never completed.
    pub fn get_document(&self, path: &str) -> Result<Document, ClientError> {
        let key = path.trim_start_matches('/');
        let url = self.api_url(&["api", "documents", key]);
        debug!("GET {}", url);
        let response = self.http.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        decode_document(status, &body)
    }

    /// Create a document from `request`.
    ///
    /// # Errors
    /// `Rejected` with the server message on any failure status, `Transport`
    /// when the request never completed.
    pub fn create_document(&self, request: &CreateDocumentRequest) -> Result<Document, ClientError> {
        let url = self.api_url(&["api", "documents"]);
        debug!("POST {}", url);
        let response = self.http.post(url).json(request).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        decode_document(status, &body)
    }

    /// Check that the server answers at all.
    pub fn ping(&self) -> Result<(), ClientError> {
        let url = self.api_url(&["api", "ping"]);
        let response = self.http.get(url).send()?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Rejected(format!("HTTP {}", status.as_u16())))
        }
    }

    /// Shareable page URL for a document key.
    pub fn share_url(&self, key: &str) -> String {
        format!("{}/{}", self.base.as_str().trim_end_matches('/'), key)
    }

    /// Raw-view URL for a document key. The raw renderer is server-side; the
    /// client only ever navigates to it.
    pub fn raw_url(&self, key: &str) -> String {
        format!("{}/raw/{}", self.base.as_str().trim_end_matches('/'), key)
    }
}
