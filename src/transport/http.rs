use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::submit::error::TransportError;

/// Status and raw body of an HTTP reply.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    /// Convenience for JSON bodies.
    pub fn json(status: u16, body: &Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and returns the reply, whatever its status.
pub trait Transport {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<HttpReply, TransportError>;
}

// ============================================================================
// reqwest Backend
// ============================================================================

/// Blocking HTTP transport. Relative endpoints are resolved against one
/// base URL so every form talks to the same server.
///
/// A submission waits for the server however long it takes: the button
/// stays in flight until a reply or a connection failure arrives.
pub struct HttpTransport {
    pub base_url: String,
    timeout: Option<Duration>,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Transport with no overall request deadline.
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_timeout(base_url, None)
    }

    /// Transport that gives up after `timeout`; `None` waits indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, TransportError> {
        // reqwest's blocking client defaults to a 30s deadline; set it explicitly.
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            base_url: base_url.to_string(),
            timeout,
            client,
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Full request URL for an endpoint. Absolute endpoints are kept as-is.
    pub fn resolve(&self, endpoint: &str) -> Result<reqwest::Url, TransportError> {
        let base = reqwest::Url::parse(&self.base_url).map_err(|e| TransportError::InvalidUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        base.join(endpoint).map_err(|e| TransportError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, endpoint: &str, body: &Value) -> Result<HttpReply, TransportError> {
        let url = self.resolve(endpoint)?;
        debug!(%url, "POST");

        let response = self.client.post(url).json(body).send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "reply");

        Ok(HttpReply { status, body })
    }
}
