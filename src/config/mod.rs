//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoints, timeouts, fixed search parameters)
//! - Browser-like header values for the direct search request
//! - The library `Config` struct and the CLI option types

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
