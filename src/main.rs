//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `image_lookup` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use image_lookup::config::Opt;
use image_lookup::initialization::init_logger_with;
use image_lookup::server::{start_server, SEARCH_FAILED_MESSAGE};
use image_lookup::{ImageResolver, ResolveError};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is the normal case
    let _ = dotenvy::dotenv();

    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let resolver = ImageResolver::new(opt.to_config()).context("Failed to build resolver")?;

    if let Some(port) = opt.serve {
        return start_server(port, Arc::new(resolver)).await;
    }

    match resolver.resolve(&opt.query_string()).await {
        Ok(lookup) => {
            println!(
                "{}",
                serde_json::to_string(&lookup).context("Failed to serialize result")?
            );
            Ok(())
        }
        Err(ResolveError::InvalidInput) => {
            eprintln!("image_lookup error: {}", ResolveError::InvalidInput);
            process::exit(2);
        }
        Err(e) => {
            log::debug!("Resolution failed: {}", e);
            eprintln!("image_lookup error: {}", SEARCH_FAILED_MESSAGE);
            process::exit(1);
        }
    }
}
