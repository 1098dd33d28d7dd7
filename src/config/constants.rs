//! Configuration constants.
//!
//! Upstream endpoints, per-strategy timeouts and the fixed query parameters
//! sent to the image search endpoint.

use std::time::Duration;

// Upstream endpoints
/// Canonical image search endpoint (scraped directly or through a relay)
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.bing.com/images/search";
/// Relay endpoint that returns the target page body unchanged
pub const DEFAULT_RELAY_RAW_ENDPOINT: &str = "https://api.allorigins.win/raw";
/// Relay endpoint that wraps the target page body in a JSON envelope
pub const DEFAULT_RELAY_JSON_ENDPOINT: &str = "https://api.allorigins.win/get";

/// Fixed parameters appended after `q` on the canonical search URL.
///
/// `adlt=strict` keeps safe-search on; locale and market are pinned so the
/// markup shape stays stable between requests.
pub const SEARCH_PARAMS: &[(&str, &str)] = &[
    ("form", "HDRSC2"),
    ("adlt", "strict"),
    ("setlang", "en-US"),
    ("mkt", "en-US"),
];

/// Query parameter carrying the search text
pub const SEARCH_QUERY_PARAM: &str = "q";
/// Query parameter the relays read the target URL from
pub const RELAY_TARGET_PARAM: &str = "url";

// Per-strategy timeouts
/// Direct request to the search endpoint. Kept short: when the endpoint
/// blocks scrapers it usually does so by stalling.
pub const DIRECT_TIMEOUT: Duration = Duration::from_millis(3500);
/// Passthrough relay request
pub const RELAY_RAW_TIMEOUT: Duration = Duration::from_millis(5000);
/// JSON-envelope relay request (fallback phase)
pub const RELAY_JSON_TIMEOUT: Duration = Duration::from_millis(5000);

/// Maximum characters of a response body included in debug logs
pub const MAX_BODY_PREVIEW_CHARS: usize = 300;

/// Default User-Agent string for the direct search request.
///
/// A desktop Chrome string; the search endpoint serves the full results page
/// (with embedded `murl`/`turl` metadata) to desktop browsers.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36";

/// Maximum number of redirect hops followed by any attempt
pub const MAX_REDIRECT_HOPS: usize = 10;
