//! Request handlers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error_handling::ResolveError;
use crate::resolve::ImageResolver;

/// Message returned for any failed resolution.
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search images";

/// Query string of `/api/search-images`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text
    pub q: Option<String>,
}

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message, free of upstream detail
    pub error: String,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

/// `GET /api/search-images?q=<query>`
///
/// - 200 `{"imageUrl": "<url>" | null}`
/// - 400 `{"error": "Query parameter is required"}` for a missing or blank `q`
/// - 500 `{"error": "Failed to search images"}` otherwise
pub async fn search_images_handler(
    State(resolver): State<Arc<ImageResolver>>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = params.q.unwrap_or_default();

    match resolver.resolve(&query).await {
        Ok(lookup) => (StatusCode::OK, Json(lookup)).into_response(),
        Err(ResolveError::InvalidInput) => error_response(
            StatusCode::BAD_REQUEST,
            &ResolveError::InvalidInput.to_string(),
        ),
        Err(e) => {
            log::error!("Error searching images for '{}': {}", query, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, SEARCH_FAILED_MESSAGE)
        }
    }
}

/// `GET /health`
pub async fn health_handler() -> &'static str {
    "ok"
}
