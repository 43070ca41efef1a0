//! Link creation and listing pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::forms::NewUrlForm;

/// Template for the new URL form.
#[derive(Template, WebTemplate)]
#[template(path = "new_url.html")]
pub struct NewUrlTemplate {
    pub error: Option<String>,
    pub url: String,
}

/// Template for the listing of every short link.
#[derive(Template, WebTemplate)]
#[template(path = "url_list.html")]
pub struct UrlListTemplate {
    pub links: Vec<ShortLink>,
}

/// Renders the empty new URL form.
///
/// # Endpoint
///
/// `GET /create`
pub async fn new_url_page() -> impl IntoResponse {
    NewUrlTemplate {
        error: None,
        url: String::new(),
    }
}

/// Shortens the submitted URL and redirects to its details page.
///
/// # Endpoint
///
/// `POST /create`
///
/// An invalid URL re-renders the form with the submitted value and the
/// message `invalid url` (400 Bad Request).
pub async fn new_url_submit(
    State(state): State<AppState>,
    Form(form): Form<NewUrlForm>,
) -> Result<Response, PageError> {
    match state.link_service.shorten(&form.url).await {
        Ok(short_id) => Ok(Redirect::to(&format!("/{short_id}_details")).into_response()),
        Err(AppError::Validation { message, .. }) => Ok((
            StatusCode::BAD_REQUEST,
            NewUrlTemplate {
                error: Some(message),
                url: form.url,
            },
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Renders every short link, newest first.
///
/// # Endpoint
///
/// `GET /short_link_list`
pub async fn list_handler(State(state): State<AppState>) -> Result<impl IntoResponse, PageError> {
    let links = state.link_service.list_all().await?;

    Ok(UrlListTemplate { links })
}
