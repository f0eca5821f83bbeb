//! Request transport
//!
//! A [`Transport`] performs exactly one GET exchange and hands back the raw
//! status, body and headers. It never interprets status codes: a 401 or a 429
//! comes back as an `Ok(HttpResponse)` like any other response. Only I/O
//! failures (connect, timeout, reading the body) are errors.

use crate::error::Result;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, ACCEPT};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// HTTP 200
pub const STATUS_OK: u16 = 200;
/// HTTP 401
pub const STATUS_UNAUTHORIZED: u16 = 401;
/// HTTP 404
pub const STATUS_NOT_FOUND: u16 = 404;
/// HTTP 429
pub const STATUS_TOO_MANY_REQUESTS: u16 = 429;

/// Raw response returned by a transport
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    /// Status code, verbatim
    pub status: u16,
    /// Response body as text
    pub body: String,
    /// Response headers
    pub headers: HeaderMap,
}

impl HttpResponse {
    /// Create a response without headers
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Create a response with headers
    pub fn with_headers(status: u16, body: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            status,
            body: body.into(),
            headers,
        }
    }

    /// Whether the server rejected the request for exceeding its rate limit
    pub fn is_rate_limited(&self) -> bool {
        self.status == STATUS_TOO_MANY_REQUESTS
    }
}

/// Sends one GET request with a bearer credential
///
/// Implementations are shared across every resource accessor of a client and
/// may be called from several threads at once.
pub trait Transport: Send + Sync {
    /// Send a GET to the fully-qualified `url`, authenticated with `credential`
    fn send(&self, url: &str, credential: &str) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, url: &str, credential: &str) -> Result<HttpResponse> {
        (**self).send(url, credential)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, url: &str, credential: &str) -> Result<HttpResponse> {
        (**self).send(url, credential)
    }
}

/// Configuration for the default transport
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Timeout applied to each individual request
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: format!("lotr-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Create a config with the given per-request timeout
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            ..Self::default()
        }
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Blocking transport backed by `reqwest`
///
/// Holds a single `reqwest` client that is reused for every request.
#[derive(Debug, Clone)]
pub struct DefaultTransport {
    client: Client,
    config: TransportConfig,
}

impl DefaultTransport {
    /// Create a transport with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        Self::with_config(TransportConfig::new(timeout))
    }

    /// Create a transport with a custom configuration
    pub fn with_config(config: TransportConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }
}

impl Transport for DefaultTransport {
    fn send(&self, url: &str, credential: &str) -> Result<HttpResponse> {
        let response = self
            .client
            .get(url)
            .bearer_auth(credential)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text()?;

        debug!("GET {} -> {}", url, status);
        Ok(HttpResponse::with_headers(status, body, headers))
    }
}
