//! Error categorization.

use super::types::FailureKind;

/// Categorizes a `reqwest::Error` into a `FailureKind`.
///
/// Status codes are checked first (errors produced by `error_for_status`),
/// then the transport-level error kind.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if let Some(status) = error.status() {
        return FailureKind::from_status(status);
    }

    if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_body() {
        FailureKind::Body
    } else if error.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Other
    }
}
