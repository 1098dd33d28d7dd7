//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::{Config, MAX_REDIRECT_HOPS};

/// Initializes the HTTP client used by every fetch attempt.
///
/// Creates a `reqwest::Client` configured with:
/// - Redirect following (up to `MAX_REDIRECT_HOPS`)
/// - A connect timeout no longer than the slowest attempt deadline
///
/// No global request timeout is set: each attempt enforces its own deadline,
/// and a shared timeout would cut the longer relay attempts short. The
/// User-Agent is set per request, since only the direct search request
/// presents itself as a browser.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let slowest = config
        .direct_timeout
        .max(config.relay_raw_timeout)
        .max(config.relay_json_timeout);
    let client = ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECT_HOPS))
        .connect_timeout(slowest)
        .build()?;
    Ok(Arc::new(client))
}
