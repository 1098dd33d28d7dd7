//! Small shared helpers.
//!
//! - CSS selector parsing for static selectors
//! - Regex compilation for static patterns
//! - Log-safe previews of untrusted response bodies

pub mod sanitize;
mod selector;

pub use sanitize::preview;
pub use selector::{compile_regex_unsafe, parse_selector_with_fallback};
