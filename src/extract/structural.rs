//! DOM pass over the parsed page.
//!
//! Lookup order, first hit wins:
//! 1. `m` metadata attributes on result containers (`.iusc[m]`), then on any
//!    element, parsed as JSON for `murl` / `turl`
//! 2. the main result image (`img.mimg`) with an absolute `src`
//! 3. any `img` whose `src` or `data-src` is absolute or protocol-relative

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::normalize::absolutize_protocol_relative;
use crate::utils::parse_selector_with_fallback;

// CSS selector strings
const RESULT_CONTAINER_SELECTOR_STR: &str = ".iusc[m]";
const METADATA_SELECTOR_STR: &str = "[m]";
const MAIN_IMAGE_SELECTOR_STR: &str = "img.mimg";
const IMAGE_SELECTOR_STR: &str = "img";

/// Attribute holding the serialized result metadata
const METADATA_ATTR: &str = "m";

/// Metadata keys in priority order: full-size image, then thumbnail
const METADATA_URL_KEYS: [&str; 2] = ["murl", "turl"];

/// Image source attributes in priority order (`data-src` is used for lazy loading)
const IMAGE_SOURCE_ATTRS: [&str; 2] = ["src", "data-src"];

static RESULT_CONTAINER_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_with_fallback(RESULT_CONTAINER_SELECTOR_STR, "RESULT_CONTAINER_SELECTOR")
});

static METADATA_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(METADATA_SELECTOR_STR, "METADATA_SELECTOR"));

static MAIN_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(MAIN_IMAGE_SELECTOR_STR, "MAIN_IMAGE_SELECTOR"));

static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(IMAGE_SELECTOR_STR, "IMAGE_SELECTOR"));

/// Parses `raw` as HTML and returns the first image URL found by the
/// structural lookups.
pub fn extract_structural(raw: &str) -> Option<String> {
    let document = Html::parse_document(raw);

    from_metadata_attributes(&document)
        .or_else(|| from_main_image(&document))
        .or_else(|| from_any_image(&document))
}

fn from_metadata_attributes(document: &Html) -> Option<String> {
    // Result containers are preferred; the generic `[m]` scan revisits them
    // afterwards, which is harmless since they already missed.
    document
        .select(&RESULT_CONTAINER_SELECTOR)
        .chain(document.select(&METADATA_SELECTOR))
        .filter_map(|element| element.value().attr(METADATA_ATTR))
        .find_map(url_from_metadata)
}

/// Reads `murl`, then `turl`, from one metadata attribute value.
///
/// Malformed JSON is a miss for this element only.
fn url_from_metadata(raw_metadata: &str) -> Option<String> {
    let metadata: serde_json::Value = match serde_json::from_str(raw_metadata) {
        Ok(value) => value,
        Err(e) => {
            log::debug!("Skipping unparseable metadata attribute: {}", e);
            return None;
        }
    };

    METADATA_URL_KEYS
        .iter()
        .filter_map(|key| metadata.get(key).and_then(|value| value.as_str()))
        .find(|url| url.starts_with("http"))
        .map(str::to_string)
}

fn from_main_image(document: &Html) -> Option<String> {
    document
        .select(&MAIN_IMAGE_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .find(|src| src.starts_with("http"))
        .map(str::to_string)
}

fn from_any_image(document: &Html) -> Option<String> {
    document.select(&IMAGE_SELECTOR).find_map(image_source)
}

fn image_source(img: ElementRef<'_>) -> Option<String> {
    IMAGE_SOURCE_ATTRS
        .iter()
        .filter_map(|attr| img.value().attr(attr))
        .find_map(|src| absolutize_protocol_relative(src.trim()))
}
