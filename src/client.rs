//! Client entry point
//!
//! [`OneApiClient`] wires the transport stack together and hands out the
//! resource accessors. Build one with [`OneApiClient::builder`].

use crate::error::{Error, Result};
use crate::http::{
    backoff, BackoffFn, DefaultTransport, RetryPolicy, RetryingTransport, Transport,
    TransportConfig,
};
use crate::resource::{Connection, MovieResource, QuoteResource};
use crate::types::BackoffType;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of retries on HTTP 429
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Client for The One API
///
/// Cheap to clone and safe to share between threads; all accessors use the
/// same underlying transport.
///
/// ```no_run
/// use lotr_sdk::OneApiClient;
///
/// let client = OneApiClient::builder().api_key("my-key").build()?;
/// for movie in client.movies().list_all(None) {
///     println!("{}", movie?.name);
/// }
/// # Ok::<(), lotr_sdk::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OneApiClient {
    movies: MovieResource,
    quotes: QuoteResource,
}

impl OneApiClient {
    /// Start building a client
    pub fn builder() -> OneApiClientBuilder {
        OneApiClientBuilder::default()
    }

    /// The `/movie` resource
    pub fn movies(&self) -> &MovieResource {
        &self.movies
    }

    /// The `/quote` resource
    pub fn quotes(&self) -> &QuoteResource {
        &self.quotes
    }
}

/// Builder for [`OneApiClient`]
///
/// Without a custom transport the client sends through [`DefaultTransport`],
/// wrapped in [`RetryingTransport`] when `max_retries` is above zero. A custom
/// transport is used exactly as given.
pub struct OneApiClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: BackoffFn,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for OneApiClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_backoff: backoff(
                BackoffType::Exponential,
                Duration::from_secs(1),
                Duration::from_secs(60),
            ),
            user_agent: None,
            transport: None,
        }
    }
}

impl OneApiClientBuilder {
    /// Set the API key (required)
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API root
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout of the default transport
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries on HTTP 429; zero disables the retry layer
    #[must_use]
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Wait before each zero-based retry attempt
    #[must_use]
    pub fn retry_backoff<F>(mut self, backoff: F) -> Self
    where
        F: Fn(u32) -> Duration + Send + Sync + 'static,
    {
        self.retry_backoff = Arc::new(backoff);
        self
    }

    /// Same as [`retry_backoff`](Self::retry_backoff) for an already shared function
    #[must_use]
    pub fn retry_backoff_fn(mut self, backoff: BackoffFn) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// User agent of the default transport
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a custom transport; no retry layer is added around it
    #[must_use]
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Validate the settings and build the client
    pub fn build(self) -> Result<OneApiClient> {
        let api_key = match self.api_key {
            Some(key) if !key.trim().is_empty() => key.trim().to_string(),
            Some(_) => return Err(Error::config("API key must not be blank")),
            None => return Err(Error::missing_field("api_key")),
        };

        let transport: Arc<dyn Transport> = match self.transport {
            Some(custom) => custom,
            None => {
                let mut config = TransportConfig::new(self.timeout);
                if let Some(agent) = self.user_agent {
                    config = config.user_agent(agent);
                }
                let inner = DefaultTransport::with_config(config)?;
                if self.max_retries > 0 {
                    let policy = RetryPolicy::with_backoff_fn(self.max_retries, self.retry_backoff);
                    Arc::new(RetryingTransport::new(inner, policy))
                } else {
                    Arc::new(inner)
                }
            }
        };

        let connection = Connection::new(&self.base_url, api_key, transport)?;
        debug!("Built client for {}", connection.base_url());

        Ok(OneApiClient {
            movies: MovieResource::new(connection.clone()),
            quotes: QuoteResource::new(connection),
        })
    }
}

impl fmt::Debug for OneApiClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneApiClientBuilder")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}
