//! Handlers for link listing and details.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::links::{LinkDetailsResponse, LinkItem, LinkListResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// # Errors
///
/// Returns 500 if the store fails or an id in the counter range has no mapping.
pub async fn link_list_handler(
    State(state): State<AppState>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_all().await?;

    Ok(Json(LinkListResponse {
        total: links.len(),
        items: links.into_iter().map(LinkItem::from).collect(),
    }))
}

/// Returns the target and click count of a link.
///
/// # Endpoint
///
/// `GET /api/links/{short_id}`
///
/// Does not count as a click.
///
/// # Errors
///
/// Returns 404 Not Found if the identifier is unknown.
pub async fn link_details_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkDetailsResponse>, AppError> {
    let details = state.link_service.details(&short_id).await?;

    Ok(Json(LinkDetailsResponse {
        short_url: state.short_url(&details.short_id),
        short_id: details.short_id,
        long_url: details.long_url,
        click_count: details.click_count,
    }))
}
