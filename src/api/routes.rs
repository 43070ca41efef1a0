//! API route configuration.

use crate::api::handlers::{link_details_handler, link_list_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`          - Shorten a URL
/// - `GET  /links`            - Every link, newest first
/// - `GET  /links/{short_id}` - Target and click count of one link
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(link_list_handler))
        .route("/links/{short_id}", get(link_details_handler))
}
