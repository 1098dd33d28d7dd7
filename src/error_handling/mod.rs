//! Error handling.
//!
//! This module provides:
//! - The public resolution error (`ResolveError`)
//! - Per-attempt failures (`AttemptError`), which never leave the fetch layer
//! - Failure categorization used when logging swallowed attempt failures
//!
//! Only exhaustion of the whole strategy chain reaches the caller. Individual
//! attempt failures are categorized, logged at debug level and dropped.

mod categorization;
mod types;

// Re-export public API
pub use types::{AttemptError, FailureKind, InitializationError, ResolveError};
