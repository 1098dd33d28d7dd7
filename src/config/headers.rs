//! Header values sent on the direct search request.
//!
//! The relays are called without extra headers; only the canonical endpoint
//! sees a browser-like request.

/// `Accept` header matching a desktop browser navigation
pub const BROWSER_ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";

/// `Accept-Language` header matching the pinned `setlang`/`mkt` parameters
pub const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
