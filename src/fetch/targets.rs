//! Upstream URL construction.
//!
//! One canonical search URL is derived per query; the relay URLs carry that
//! same canonical URL, percent-encoded, in their `url` parameter.

use url::Url;

use crate::config::{Config, RELAY_TARGET_PARAM, SEARCH_PARAMS, SEARCH_QUERY_PARAM};

/// Parsed upstream endpoints, validated once when a resolver is built.
#[derive(Debug, Clone)]
pub struct Endpoints {
    /// Image search endpoint
    pub search: Url,
    /// Passthrough relay
    pub relay_raw: Url,
    /// JSON-envelope relay
    pub relay_json: Url,
}

impl Endpoints {
    /// Parses the endpoint strings from `config`.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the first endpoint that is not an absolute URL.
    pub fn from_config(config: &Config) -> Result<Self, url::ParseError> {
        Ok(Self {
            search: Url::parse(&config.search_endpoint)?,
            relay_raw: Url::parse(&config.relay_raw_endpoint)?,
            relay_json: Url::parse(&config.relay_json_endpoint)?,
        })
    }
}

/// The three URLs one resolution may request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTargets {
    /// Search endpoint with the encoded query and fixed search parameters
    pub canonical: Url,
    /// Passthrough relay wrapping `canonical`
    pub relay_raw: Url,
    /// JSON-envelope relay wrapping `canonical`
    pub relay_json: Url,
}

impl UpstreamTargets {
    /// Builds the targets for `query`. Deterministic: the same query and
    /// endpoints always produce the same URLs.
    pub fn for_query(endpoints: &Endpoints, query: &str) -> Self {
        let mut canonical = endpoints.search.clone();
        canonical
            .query_pairs_mut()
            .append_pair(SEARCH_QUERY_PARAM, query)
            .extend_pairs(SEARCH_PARAMS.iter().copied());

        let relay_raw = wrap_in_relay(&endpoints.relay_raw, &canonical);
        let relay_json = wrap_in_relay(&endpoints.relay_json, &canonical);

        Self {
            canonical,
            relay_raw,
            relay_json,
        }
    }
}

fn wrap_in_relay(relay: &Url, target: &Url) -> Url {
    let mut url = relay.clone();
    url.query_pairs_mut()
        .append_pair(RELAY_TARGET_PARAM, target.as_str());
    url
}
