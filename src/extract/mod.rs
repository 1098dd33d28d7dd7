//! Image URL extraction from an image-results page.
//!
//! Content arrives from a third party in an unknown shape: the results page
//! itself, or the same page served by a relay. Extraction runs as an ordered
//! chain of passes, each returning at most one URL:
//!
//! 1. **fast**: regex scan of the raw text for serialized `murl` / `turl`
//!    metadata fields
//! 2. **structural**: HTML parse, then metadata attributes, the main result
//!    image and finally any image element with an absolute source
//!
//! The fast pass runs first because it needs no parsing and handles the common
//! page shape. The structural pass covers markup where the metadata is only
//! present entity-encoded inside attributes.
//!
//! Extraction is purely syntactic: nothing here checks that a URL is
//! reachable or that it points at an image.

mod fast;
mod normalize;
mod structural;

pub use fast::extract_fast;
pub use normalize::{absolutize_protocol_relative, normalize_escapes};
pub use structural::extract_structural;

/// A single extraction strategy.
pub type ExtractionPass = fn(&str) -> Option<String>;

/// Extraction passes in the order they are tried.
pub const EXTRACTION_PASSES: &[(&str, ExtractionPass)] = &[
    ("fast", extract_fast),
    ("structural", extract_structural),
];

/// Returns the first image URL found in `raw`, or `None` if no pass matches.
///
/// `None` is a valid outcome (the page had no recognizable result), not an
/// error.
pub fn extract_image_url(raw: &str) -> Option<String> {
    EXTRACTION_PASSES.iter().find_map(|(name, pass)| {
        let found = pass(raw);
        match &found {
            Some(url) => log::debug!("Extraction pass '{}' matched: {}", name, url),
            None => log::debug!("Extraction pass '{}' found nothing", name),
        }
        found
    })
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
