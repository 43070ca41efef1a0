//! Handler for the shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short identifier of a URL, allocating one on first submission.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_id": "1b",
///   "short_url": "http://localhost:3000/1b",
///   "long_url": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with the message `invalid url` if the URL is not an
/// absolute HTTP(S) URL usable as a redirect target.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let short_id = state.link_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse {
        short_url: state.short_url(&short_id),
        short_id,
        long_url: payload.url,
    }))
}
