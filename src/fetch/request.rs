//! Request construction for each fetch strategy.

use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::config::{BROWSER_ACCEPT, BROWSER_ACCEPT_LANGUAGE};

/// Browser-like headers for the direct request to the search endpoint.
///
/// The search endpoint serves its full results page (with the embedded result
/// metadata) only to requests that look like a desktop browser navigation.
/// The relays fetch the target themselves and get no extra headers.
pub(crate) struct BrowserHeaders;

impl BrowserHeaders {
    /// Returns the headers as (name, value) pairs, for logging and tests.
    pub(crate) fn as_vec(user_agent: &str) -> Vec<(String, String)> {
        vec![
            ("user-agent".to_string(), user_agent.to_string()),
            ("accept".to_string(), BROWSER_ACCEPT.to_string()),
            (
                "accept-language".to_string(),
                BROWSER_ACCEPT_LANGUAGE.to_string(),
            ),
        ]
    }

    /// Applies the browser headers to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: RequestBuilder,
        user_agent: &str,
    ) -> RequestBuilder {
        builder
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(reqwest::header::ACCEPT, BROWSER_ACCEPT)
            .header(reqwest::header::ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
    }
}

/// GET to the canonical search URL, dressed as a browser.
pub(crate) fn direct_request(client: &Client, target: &Url, user_agent: &str) -> RequestBuilder {
    BrowserHeaders::apply_to_request_builder(client.get(target.clone()), user_agent)
}

/// Plain GET to a relay URL.
pub(crate) fn relay_request(client: &Client, relay: &Url) -> RequestBuilder {
    client.get(relay.clone())
}
