//! Short link redirect and details page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::HeaderValue,
    response::{IntoResponse, Redirect, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;

/// Suffix that turns a short link path into its details page.
///
/// Short identifiers only use `[0-9a-z]`, so the suffix can never be part of one.
const DETAILS_SUFFIX: &str = "_details";

/// Template for a short link's details page.
#[derive(Template, WebTemplate)]
#[template(path = "short_link_details.html")]
pub struct DetailsTemplate {
    pub short_id: String,
    pub short_url: String,
    pub link_target: String,
    pub hostname: String,
    pub click_count: u64,
}

/// Dispatches `/{short_id}` and `/{short_id}_details`.
///
/// # Endpoint
///
/// `GET /{short_id}`
///
/// Follows the link: counts the click and answers 307 Temporary Redirect to
/// the target. Unknown identifiers render the 404 page and are not counted.
///
/// `GET /{short_id}_details`
///
/// Renders the target URL and click count, or the 404 page.
pub async fn short_link_handler(
    Path(segment): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, PageError> {
    match segment.strip_suffix(DETAILS_SUFFIX) {
        Some(short_id) => details(&state, short_id).await,
        None => follow(&state, &segment).await,
    }
}

async fn follow(state: &AppState, short_id: &str) -> Result<Response, PageError> {
    let target = state.link_service.get_target(short_id).await?;

    // Only a redirect that can actually be sent counts as a click.
    if HeaderValue::from_str(&target).is_err() {
        return Err(AppError::internal(
            "Stored target is not a valid Location header",
            json!({ "short_id": short_id }),
        )
        .into());
    }

    state.click_service.increment(short_id).await?;
    debug!("Redirecting {} -> {}", short_id, target);

    Ok(Redirect::temporary(&target).into_response())
}

async fn details(state: &AppState, short_id: &str) -> Result<Response, PageError> {
    let details = state.link_service.details(short_id).await?;

    Ok(DetailsTemplate {
        short_url: state.short_url(&details.short_id),
        hostname: details.hostname(),
        short_id: details.short_id,
        link_target: details.long_url,
        click_count: details.click_count,
    }
    .into_response())
}
