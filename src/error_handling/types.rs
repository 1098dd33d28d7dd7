//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

use super::categorization::categorize_reqwest_error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// A configured endpoint is not a valid absolute URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Caller-visible outcome of a failed resolution.
///
/// "No image found" is not an error: it is `Ok` with an empty lookup.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The query was empty or blank. Raised before any network activity.
    #[error("Query parameter is required")]
    InvalidInput,

    /// Every fetch strategy failed or timed out.
    #[error("All upstream strategies failed")]
    UpstreamExhausted,

    /// The resolver could not be built (HTTP client setup).
    #[error(transparent)]
    Initialization(#[from] InitializationError),
}

/// Failure of a single fetch attempt.
///
/// Attempt failures are recovered by moving on to the next strategy and are
/// never returned from the public API.
#[derive(Error, Debug)]
pub enum AttemptError {
    /// Transport-level failure (connect, request, body read).
    #[error("request failed: {0}")]
    Request(#[from] ReqwestError),

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// The upstream answered 2xx with nothing in the body.
    #[error("upstream returned an empty body")]
    EmptyBody,

    /// The relay envelope could not be decoded or had no usable `contents`.
    #[error("invalid relay envelope: {0}")]
    Envelope(String),

    /// The attempt did not finish before its deadline.
    #[error("attempt timed out after {0:?}")]
    Timeout(Duration),
}

impl AttemptError {
    /// Coarse category of this failure, used for log lines.
    pub fn category(&self) -> FailureKind {
        match self {
            AttemptError::Request(e) => categorize_reqwest_error(e),
            AttemptError::Status(status) => FailureKind::from_status(*status),
            AttemptError::EmptyBody => FailureKind::EmptyBody,
            AttemptError::Envelope(_) => FailureKind::Envelope,
            AttemptError::Timeout(_) => FailureKind::Timeout,
        }
    }
}

/// Categories of attempt failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Deadline expired (ours or reqwest's)
    Timeout,
    /// TCP/TLS connection could not be established
    Connect,
    /// 403, typically an anti-scraping block
    Blocked,
    /// 429
    RateLimited,
    /// Other 4xx
    ClientError,
    /// 5xx
    ServerError,
    /// Response body could not be read
    Body,
    /// Response body could not be decoded
    Decode,
    /// 2xx with empty body
    EmptyBody,
    /// Relay JSON envelope unusable
    Envelope,
    /// Anything else reqwest reports
    Other,
}

impl FailureKind {
    /// Maps a non-success HTTP status to its category.
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            403 => FailureKind::Blocked,
            429 => FailureKind::RateLimited,
            _ if status.is_server_error() => FailureKind::ServerError,
            _ if status.is_client_error() => FailureKind::ClientError,
            _ => FailureKind::Other,
        }
    }

    /// Human-readable label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Timeout => "timeout",
            FailureKind::Connect => "connect error",
            FailureKind::Blocked => "blocked (403 Forbidden)",
            FailureKind::RateLimited => "rate limited (429)",
            FailureKind::ClientError => "client error (4xx)",
            FailureKind::ServerError => "server error (5xx)",
            FailureKind::Body => "body read error",
            FailureKind::Decode => "decode error",
            FailureKind::EmptyBody => "empty body",
            FailureKind::Envelope => "invalid envelope",
            FailureKind::Other => "other error",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
