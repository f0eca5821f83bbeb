//! HTTP transport module
//!
//! Provides the pluggable transport and the rate-limit retry decorator.
//!
//! # Features
//!
//! - **Transport**: one GET per call, raw status/body/headers back
//! - **Retry on 429**: bounded retries with an injectable backoff function
//! - **Rate limit metadata**: `x-ratelimit-*` headers parsed per response
//!
//! ```text
//! ResourceClient ──▶ RetryingTransport ──▶ DefaultTransport ──▶ network
//! ```

mod rate_limit;
mod retry;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use rate_limit::{
    RateLimitMetadata, RATE_LIMIT_LIMIT_HEADER, RATE_LIMIT_REMAINING_HEADER,
    RATE_LIMIT_RESET_HEADER,
};
pub use retry::{backoff, calculate_backoff, BackoffFn, RetryPolicy, RetryingTransport};
pub use transport::{
    DefaultTransport, HttpResponse, Transport, TransportConfig, STATUS_NOT_FOUND, STATUS_OK,
    STATUS_TOO_MANY_REQUESTS, STATUS_UNAUTHORIZED,
};
