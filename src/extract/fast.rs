//! Regex pass over the raw page text.

use regex::Regex;
use std::sync::LazyLock;

use super::normalize::normalize_escapes;
use crate::utils::compile_regex_unsafe;

// A quoted value starting with `http`. Backslash escapes (`\/`, `\u0026`,
// `\"`) are consumed as pairs so an escaped quote does not end the value.
static MURL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r#""murl"\s*:\s*"(http(?:[^"\\]|\\.)*)""#, "MURL_PATTERN")
});

static TURL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    compile_regex_unsafe(r#""turl"\s*:\s*"(http(?:[^"\\]|\\.)*)""#, "TURL_PATTERN")
});

/// Finds the first serialized `murl` (full-size image) field in `raw`,
/// falling back to the first `turl` (thumbnail) field.
///
/// The whole text is scanned for `murl` before any `turl` is considered, so a
/// thumbnail earlier in the page never beats a full-size URL later on.
pub fn extract_fast(raw: &str) -> Option<String> {
    [&*MURL_PATTERN, &*TURL_PATTERN]
        .into_iter()
        .find_map(|pattern| first_capture(pattern, raw))
        .map(|url| normalize_escapes(&url))
}

fn first_capture(pattern: &Regex, raw: &str) -> Option<String> {
    pattern
        .captures(raw)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
