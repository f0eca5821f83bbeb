//! Scripted transport for unit tests
//!
//! Replays queued responses in order and records every request it receives.

use super::transport::{HttpResponse, Transport};
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use std::collections::VecDeque;
use std::sync::Mutex;

/// A request seen by [`MockTransport`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordedRequest {
    pub(crate) url: String,
    pub(crate) credential: String,
}

/// Transport that replays queued responses and records requests
#[derive(Debug, Default)]
pub(crate) struct MockTransport {
    responses: Mutex<VecDeque<Result<HttpResponse>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Empty queue, no recorded requests
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next request
    pub(crate) fn enqueue(&self, response: HttpResponse) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue a transport failure for the next request
    pub(crate) fn enqueue_error(&self, error: Error) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Queue a 200 with the given JSON body
    pub(crate) fn enqueue_ok(&self, body: &str) -> &Self {
        self.enqueue(HttpResponse::new(200, body))
    }

    /// Queue a 429 carrying rate limit headers
    pub(crate) fn enqueue_rate_limited(
        &self,
        limit: u64,
        remaining: u64,
        reset: u64,
    ) -> &Self {
        self.enqueue(HttpResponse::with_headers(
            429,
            "Too Many Requests",
            rate_limit_headers(limit, remaining, reset),
        ))
    }

    /// Every request seen so far, in order
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_url(&self) -> String {
        self.requests
            .lock()
            .unwrap()
            .last()
            .map(|r| r.url.clone())
            .unwrap_or_default()
    }
}

impl Transport for MockTransport {
    fn send(&self, url: &str, credential: &str) -> Result<HttpResponse> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            url: url.to_string(),
            credential: credential.to_string(),
        });

        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            panic!(
                "No more enqueued responses. Request #{} to: {}",
                requests.len(),
                url
            )
        })
    }
}

/// `x-ratelimit-*` headers for a 429
pub(crate) fn rate_limit_headers(limit: u64, remaining: u64, reset: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("x-ratelimit-limit", HeaderValue::from(limit));
    headers.insert("x-ratelimit-remaining", HeaderValue::from(remaining));
    headers.insert("x-ratelimit-reset", HeaderValue::from(reset));
    headers
}
