//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `/`, `/home`, `/create`, ... - HTML pages (see [`crate::web::routes`])
//! - `GET  /{short_id}`           - Short link redirect
//! - `GET  /health`               - Store health check
//! - `/api/*`                     - JSON API
//! - `/static/*`                  - Static assets
//!
//! Unknown paths render the 404 page.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::error::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application routes with tracing, without path normalization.
pub fn app_routes(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
///
/// Trailing slashes are trimmed before routing, so `/create/` reaches `/create`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app_routes(state))
}
