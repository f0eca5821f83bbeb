//! Rate-limit retry decorator
//!
//! [`RetryingTransport`] wraps another [`Transport`] and only ever intercepts
//! HTTP 429. Every other response, success or error, passes through untouched.
//!
//! On a 429 the response's rate limit headers decide what happens next:
//! - window exhausted: fail at once with [`Error::RateLimited`], no sleep and
//!   no retry slot consumed
//! - otherwise: sleep for `backoff(attempt)` and send again, up to
//!   `max_retries` times

use super::rate_limit::RateLimitMetadata;
use super::transport::{HttpResponse, Transport};
use crate::error::{Error, Result};
use crate::types::BackoffType;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Maps a zero-based retry attempt to the time to wait before it
pub type BackoffFn = Arc<dyn Fn(u32) -> Duration + Send + Sync>;

/// Bounded retry policy for rate-limited responses
#[derive(Clone)]
pub struct RetryPolicy {
    max_retries: u32,
    backoff: BackoffFn,
}

impl RetryPolicy {
    /// Create a policy from a retry budget and a backoff function
    pub fn new<F>(max_retries: u32, backoff: F) -> Self
    where
        F: Fn(u32) -> Duration + Send + Sync + 'static,
    {
        Self {
            max_retries,
            backoff: Arc::new(backoff),
        }
    }

    /// Create a policy from an already shared backoff function
    pub fn with_backoff_fn(max_retries: u32, backoff: BackoffFn) -> Self {
        Self {
            max_retries,
            backoff,
        }
    }

    /// Exponential backoff: 1s, 2s, 4s, ...
    pub fn exponential(max_retries: u32) -> Self {
        Self::with_backoff_fn(
            max_retries,
            backoff(
                BackoffType::Exponential,
                Duration::from_secs(1),
                Duration::from_secs(60),
            ),
        )
    }

    /// Same wait before every retry
    pub fn constant(max_retries: u32, delay: Duration) -> Self {
        Self::with_backoff_fn(max_retries, backoff(BackoffType::Constant, delay, delay))
    }

    /// Wait grows by `step` per attempt, capped at `max`
    pub fn linear(max_retries: u32, step: Duration, max: Duration) -> Self {
        Self::with_backoff_fn(max_retries, backoff(BackoffType::Linear, step, max))
    }

    /// No retries; a 429 fails immediately
    pub fn disabled() -> Self {
        Self::new(0, |_| Duration::ZERO)
    }

    /// Maximum number of retries after the first request
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Wait before the given zero-based retry attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        (self.backoff)(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::exponential(3)
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_retries", &self.max_retries)
            .finish_non_exhaustive()
    }
}

/// Build a backoff function of the given shape, capped at `max`
pub fn backoff(backoff_type: BackoffType, initial: Duration, max: Duration) -> BackoffFn {
    Arc::new(move |attempt| calculate_backoff(backoff_type, initial, max, attempt))
}

/// Calculate backoff delay for a given attempt
pub fn calculate_backoff(
    backoff_type: BackoffType,
    initial: Duration,
    max: Duration,
    attempt: u32,
) -> Duration {
    let delay = match backoff_type {
        BackoffType::Constant => initial,
        BackoffType::Linear => initial.saturating_mul(attempt.saturating_add(1)),
        BackoffType::Exponential => {
            let factor = 2u32.saturating_pow(attempt);
            initial.saturating_mul(factor)
        }
    };

    std::cmp::min(delay, max)
}

/// Transport decorator that retries rate-limited requests
#[derive(Debug, Clone)]
pub struct RetryingTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryingTransport<T> {
    /// Wrap `inner` with the given retry policy
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    /// The retry policy in use
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// The wrapped transport
    pub fn inner(&self) -> &T {
        &self.inner
    }
}

impl<T: Transport> Transport for RetryingTransport<T> {
    fn send(&self, url: &str, credential: &str) -> Result<HttpResponse> {
        let max_retries = self.policy.max_retries;
        let mut response = self.inner.send(url, credential)?;
        let mut attempt = 0;

        while response.is_rate_limited() && attempt < max_retries {
            let metadata = RateLimitMetadata::from_headers(&response.headers);
            if metadata.is_window_exhausted() {
                return Err(window_exhausted(metadata));
            }

            let wait = self.policy.delay_for(attempt);
            warn!(
                "Rate limited (429), attempt {}/{}, waiting {:?}",
                attempt + 1,
                max_retries + 1,
                wait
            );
            std::thread::sleep(wait);

            response = self.inner.send(url, credential)?;
            attempt += 1;
        }

        if response.is_rate_limited() {
            let metadata = RateLimitMetadata::from_headers(&response.headers);
            if metadata.is_window_exhausted() {
                return Err(window_exhausted(metadata));
            }
            return Err(Error::rate_limited(
                format!("Rate limit exceeded after {max_retries} retries"),
                metadata,
            ));
        }

        Ok(response)
    }
}

fn window_exhausted(metadata: RateLimitMetadata) -> Error {
    warn!(
        "Rate limit window exhausted ({}/{}), resets at {}",
        metadata.remaining, metadata.limit, metadata.reset
    );
    Error::rate_limited(
        "No more requests remaining in the current rate window",
        metadata,
    )
}
