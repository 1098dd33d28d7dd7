//! Query resolution: fetch the results page, extract one image URL.

use std::sync::Arc;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error_handling::{InitializationError, ResolveError};
use crate::extract::extract_image_url;
use crate::fetch::{fetch_raw_content, Endpoints, UpstreamTargets};
use crate::initialization::init_client;
use crate::utils::preview;

/// Result of a successful resolution.
///
/// Serializes as `{"imageUrl": "<url>"}` or `{"imageUrl": null}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLookup {
    /// First plausible image URL, or `None` when the page had no recognizable result
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

/// Resolves queries against one set of upstream endpoints.
///
/// Holds the validated endpoints and a shared HTTP client; cheap to share
/// behind an `Arc` across server handlers. Each call to [`resolve`] is
/// independent.
///
/// [`resolve`]: ImageResolver::resolve
#[derive(Debug, Clone)]
pub struct ImageResolver {
    config: Config,
    endpoints: Endpoints,
    client: Arc<reqwest::Client>,
}

impl ImageResolver {
    /// Builds a resolver from `config`.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidEndpoint` if an endpoint is not an
    /// absolute URL, or `InitializationError::HttpClientError` if the HTTP
    /// client cannot be built.
    pub fn new(config: Config) -> Result<Self, InitializationError> {
        let endpoints = Endpoints::from_config(&config)?;
        let client = init_client(&config)?;
        Ok(Self {
            config,
            endpoints,
            client,
        })
    }

    /// The configuration this resolver was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves `query` to at most one image URL.
    ///
    /// The query is trimmed; a blank query is rejected before any network
    /// activity. Finding no image is `Ok` with `image_url: None`.
    ///
    /// Network time is bounded by [`Config::max_resolution_time`].
    ///
    /// # Errors
    ///
    /// - `ResolveError::InvalidInput` for an empty or blank query
    /// - `ResolveError::UpstreamExhausted` when every fetch strategy failed
    pub async fn resolve(&self, query: &str) -> Result<ImageLookup, ResolveError> {
        let query = validate_query(query)?;

        let targets = UpstreamTargets::for_query(&self.endpoints, query);
        debug!("Resolving '{}' via {}", query, targets.canonical);

        let content = fetch_raw_content(&self.client, &self.config, &targets).await?;
        let image_url = extract_image_url(&content.body);

        match &image_url {
            Some(url) => info!("Resolved '{}' via {}: {}", query, content.source, url),
            None => {
                info!(
                    "No image found for '{}' in {} content",
                    query, content.source
                );
                debug!("Content without image markers: {}", preview(&content.body));
            }
        }

        Ok(ImageLookup { image_url })
    }
}

/// Resolves `query` with the default configuration.
///
/// # Errors
///
/// See [`ImageResolver::resolve`]; additionally fails with
/// `ResolveError::Initialization` if the default resolver cannot be built.
///
/// # Example
///
/// ```no_run
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let lookup = image_lookup::resolve_image("red panda").await?;
/// if let Some(url) = lookup.image_url {
///     println!("{}", url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn resolve_image(query: &str) -> Result<ImageLookup, ResolveError> {
    validate_query(query)?;
    ImageResolver::new(Config::default())?.resolve(query).await
}

/// Returns the trimmed query, or `InvalidInput` if nothing is left.
fn validate_query(query: &str) -> Result<&str, ResolveError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::InvalidInput);
    }
    Ok(trimmed)
}
