//! HTTP boundary for the resolver.
//!
//! Provides two endpoints:
//! - `/api/search-images?q=<query>` - resolves the query to `{"imageUrl": ...}`
//! - `/health` - liveness probe
//!
//! Failures are reported with a generic message; upstream detail stays in
//! the logs.

mod handlers;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::resolve::ImageResolver;
use handlers::{health_handler, search_images_handler};
pub use handlers::{ErrorBody, SearchParams, SEARCH_FAILED_MESSAGE};

/// Builds the router with `resolver` as shared state.
pub fn router(resolver: Arc<ImageResolver>) -> Router {
    Router::new()
        .route("/api/search-images", get(search_images_handler))
        .route("/health", get(health_handler))
        .with_state(resolver)
}

/// Binds `127.0.0.1:<port>` and serves until the process exits.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server stops with an
/// I/O error.
pub async fn start_server(port: u16, resolver: Arc<ImageResolver>) -> Result<(), anyhow::Error> {
    let app = router(resolver);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to port {}: {}", port, e))?;

    log::info!("Listening on http://127.0.0.1:{}/", port);
    log::info!(
        "  - Search: http://127.0.0.1:{}/api/search-images?q=<query>",
        port
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
