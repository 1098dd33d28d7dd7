//! Log-safe previews of untrusted text.
//!
//! Response bodies come from third parties; before they appear in a log line
//! they are stripped of control characters and cut to a bounded length.

use crate::config::MAX_BODY_PREVIEW_CHARS;

/// Removes control characters other than tab, newline and carriage return.
pub fn strip_control_chars(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Returns at most `MAX_BODY_PREVIEW_CHARS` characters of `text`, on one line.
///
/// Truncation is by character, never inside a UTF-8 sequence, and is marked
/// with the original length.
pub fn preview(text: &str) -> String {
    let single_line = strip_control_chars(text).replace(['\n', '\r', '\t'], " ");
    let total = single_line.chars().count();
    if total <= MAX_BODY_PREVIEW_CHARS {
        return single_line;
    }
    let head: String = single_line.chars().take(MAX_BODY_PREVIEW_CHARS).collect();
    format!("{}... ({} chars)", head, total)
}
