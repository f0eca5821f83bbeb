//! Error types for the LOTR SDK
//!
//! This module defines the error hierarchy for the entire SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Every failure is distinguishable by variant: callers match on
//! [`Error::Authentication`], [`Error::NotFound`], [`Error::RateLimited`],
//! [`Error::Api`], [`Error::Transport`] or [`Error::Deserialization`] rather
//! than parsing messages.

use crate::http::RateLimitMetadata;
use thiserror::Error;

/// Boxed cause carried by transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The main error type for the LOTR SDK
#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    // ============================================================================
    // API Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        metadata: RateLimitMetadata,
    },

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {message}")]
    Transport {
        message: String,
        #[source]
        source: BoxError,
    },

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to decode response: {0}")]
    Deserialization(#[source] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid filter error
    pub fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a rate limit error carrying the window metadata
    pub fn rate_limited(message: impl Into<String>, metadata: RateLimitMetadata) -> Self {
        Self::RateLimited {
            message: message.into(),
            metadata,
        }
    }

    /// Create a generic API error from a non-success status
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a transport error wrapping an underlying cause
    pub fn transport(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            message: message.into(),
            source: source.into(),
        }
    }

    /// HTTP status associated with this error, if it came from a response
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { .. } => Some(401),
            Error::NotFound { .. } => Some(404),
            Error::RateLimited { .. } => Some(429),
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Rate limit metadata, for [`Error::RateLimited`] only
    pub fn rate_limit(&self) -> Option<&RateLimitMetadata> {
        match self {
            Error::RateLimited { metadata, .. } => Some(metadata),
            _ => None,
        }
    }

    /// Check if this error is a rate limit rejection
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection failed".to_string()
        } else {
            err.to_string()
        };
        Self::transport(message, err)
    }
}

/// Result type alias for the LOTR SDK
pub type Result<T> = std::result::Result<T, Error>;
