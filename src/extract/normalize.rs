//! Escape and scheme normalization for extracted URLs.

/// Undoes the escaping found on URLs embedded in serialized page metadata.
///
/// - `\/` (JSON-escaped slash) becomes `/`
/// - `\u0026` (JSON unicode escape) becomes `&`
/// - `&amp;` (HTML entity) becomes `&`
pub fn normalize_escapes(url: &str) -> String {
    url.replace("\\/", "/")
        .replace("\\u0026", "&")
        .replace("&amp;", "&")
}

/// Returns `src` if it is absolute, `https:` + `src` if it is protocol-relative,
/// and `None` for anything else (relative paths, `data:` URIs, blanks).
pub fn absolutize_protocol_relative(src: &str) -> Option<String> {
    if src.starts_with("//") {
        Some(format!("https:{}", src))
    } else if src.starts_with("http://") || src.starts_with("https://") {
        Some(src.to_string())
    } else {
        None
    }
}
