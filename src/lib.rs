//! image_lookup library: resolve a search query to one image URL
//!
//! The library scrapes an image-results page and returns the first plausible
//! image URL on it. Fetching copes with blocking and stalls by racing a direct
//! request against a relay, then falling back to a second relay; extraction
//! tries a regex scan of the raw text before parsing the page structurally.
//!
//! # Example
//!
//! ```no_run
//! use image_lookup::{Config, ImageResolver};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = ImageResolver::new(Config {
//!     direct_timeout: Duration::from_secs(2),
//!     ..Default::default()
//! })?;
//!
//! match resolver.resolve("red panda").await?.image_url {
//!     Some(url) => println!("{}", url),
//!     None => println!("no image found"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
mod resolve;
pub mod server;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FailureKind, InitializationError, ResolveError};
pub use extract::extract_image_url;
pub use resolve::{resolve_image, ImageLookup, ImageResolver};
