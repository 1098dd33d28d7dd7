//! A single fetch attempt under its own deadline.

use std::time::{Duration, Instant};

use log::debug;
use reqwest::RequestBuilder;
use serde::Deserialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::error_handling::AttemptError;
use crate::utils::preview;

/// The upstream strategies, in chain order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FetchStrategy {
    /// Direct request to the search endpoint with browser headers
    Direct,
    /// Passthrough relay returning the target body as-is
    RelayRaw,
    /// Relay returning the target body inside a JSON envelope
    RelayJson,
}

impl FetchStrategy {
    /// Short label used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStrategy::Direct => "direct",
            FetchStrategy::RelayRaw => "relay-raw",
            FetchStrategy::RelayJson => "relay-json",
        }
    }
}

impl std::fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Page content obtained by a successful attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawContent {
    /// Strategy that produced the content
    pub source: FetchStrategy,
    /// Page markup (already unwrapped from the relay envelope, if any)
    pub body: String,
}

/// Relay envelope: `{"contents": "<html>...</html>", ...}`. Other fields
/// (status, content type) are ignored.
#[derive(Debug, Deserialize)]
struct RelayEnvelope {
    contents: Option<String>,
}

/// Runs one attempt: send, check status, read the body, unwrap the envelope
/// for `RelayJson`, all bounded by `deadline`.
///
/// Expiry drops the in-flight request future, so it cancels this attempt only.
pub(crate) async fn run_attempt(
    strategy: FetchStrategy,
    request: RequestBuilder,
    deadline: Duration,
) -> Result<RawContent, AttemptError> {
    let started = Instant::now();

    let outcome = match tokio::time::timeout(deadline, fetch_body(strategy, request)).await {
        Ok(result) => result,
        Err(_) => Err(AttemptError::Timeout(deadline)),
    };

    let elapsed_ms = started.elapsed().as_millis();
    match &outcome {
        Ok(body) => debug!(
            "{} attempt succeeded in {}ms ({} bytes)",
            strategy,
            elapsed_ms,
            body.len()
        ),
        Err(e) => debug!(
            "{} attempt failed after {}ms [{}]: {}",
            strategy,
            elapsed_ms,
            e.category(),
            e
        ),
    }

    outcome.map(|body| RawContent {
        source: strategy,
        body,
    })
}

async fn fetch_body(strategy: FetchStrategy, request: RequestBuilder) -> Result<String, AttemptError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(AttemptError::Status(status));
    }

    let body = response.text().await?;
    let content = match strategy {
        FetchStrategy::RelayJson => unwrap_envelope(&body)?,
        FetchStrategy::Direct | FetchStrategy::RelayRaw => body,
    };

    if content.trim().is_empty() {
        return Err(AttemptError::EmptyBody);
    }
    Ok(content)
}

/// Extracts the target page from a relay JSON envelope.
///
/// A body that is not JSON, has no `contents` string, or has an empty one is
/// a failed attempt.
pub(crate) fn unwrap_envelope(body: &str) -> Result<String, AttemptError> {
    let envelope: RelayEnvelope = serde_json::from_str(body).map_err(|e| {
        debug!("Relay envelope is not JSON: {}", preview(body));
        AttemptError::Envelope(e.to_string())
    })?;

    match envelope.contents {
        Some(contents) if !contents.is_empty() => Ok(contents),
        Some(_) => Err(AttemptError::Envelope("empty contents".to_string())),
        None => Err(AttemptError::Envelope("missing contents".to_string())),
    }
}
