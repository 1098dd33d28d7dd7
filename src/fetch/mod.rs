//! Fetch orchestration.
//!
//! Obtains the raw results page for one query from an upstream that may
//! block, stall or fail. The strategy chain runs in two phases:
//!
//! 1. **Race**: the direct request and the passthrough relay run
//!    concurrently; the first success wins and the loser is dropped.
//! 2. **Fallback**: only if both racers failed, the JSON-envelope relay is
//!    tried once.
//!
//! Each attempt owns its deadline. Attempt failures are logged and
//! swallowed; only exhaustion of both phases is an error. Nothing is retried.

mod attempt;
mod request;
mod targets;

use futures::future::{select_ok, BoxFuture};
use futures::FutureExt;
use log::{debug, warn};
use reqwest::Client;

use crate::config::Config;
use crate::error_handling::{AttemptError, ResolveError};

pub use attempt::{FetchStrategy, RawContent};
pub use targets::{Endpoints, UpstreamTargets};

pub(crate) use attempt::run_attempt;
pub(crate) use request::{direct_request, relay_request, BrowserHeaders};

/// Runs the strategy chain for `targets` and returns the first page obtained.
///
/// # Errors
///
/// Returns `ResolveError::UpstreamExhausted` when the race phase and the
/// fallback both fail.
pub async fn fetch_raw_content(
    client: &Client,
    config: &Config,
    targets: &UpstreamTargets,
) -> Result<RawContent, ResolveError> {
    if let Some(content) = race_phase(client, config, targets).await {
        return Ok(content);
    }

    debug!("Race phase produced nothing, falling back to the JSON relay");
    match fallback_phase(client, config, targets).await {
        Ok(content) => Ok(content),
        Err(_) => {
            warn!("All upstream strategies failed for {}", targets.canonical);
            Err(ResolveError::UpstreamExhausted)
        }
    }
}

/// Phase 1: first success among the direct request and the passthrough relay.
async fn race_phase(
    client: &Client,
    config: &Config,
    targets: &UpstreamTargets,
) -> Option<RawContent> {
    log::trace!(
        "Direct request headers: {:?}",
        BrowserHeaders::as_vec(&config.user_agent)
    );
    let racers: Vec<BoxFuture<'_, Result<RawContent, AttemptError>>> = vec![
        run_attempt(
            FetchStrategy::Direct,
            direct_request(client, &targets.canonical, &config.user_agent),
            config.direct_timeout,
        )
        .boxed(),
        run_attempt(
            FetchStrategy::RelayRaw,
            relay_request(client, &targets.relay_raw),
            config.relay_raw_timeout,
        )
        .boxed(),
    ];

    // select_ok resolves on the first Ok; the still-pending racer is dropped
    // along with the returned remainder.
    match select_ok(racers).await {
        Ok((content, _pending)) => Some(content),
        Err(_) => None,
    }
}

/// Phase 2: the JSON-envelope relay, once.
async fn fallback_phase(
    client: &Client,
    config: &Config,
    targets: &UpstreamTargets,
) -> Result<RawContent, AttemptError> {
    run_attempt(
        FetchStrategy::RelayJson,
        relay_request(client, &targets.relay_json),
        config.relay_json_timeout,
    )
    .await
}
