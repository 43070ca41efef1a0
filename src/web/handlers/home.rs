//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::HeaderMap, response::IntoResponse};

use crate::state::AppState;
use crate::web::session::current_user;

/// Template for the home page.
///
/// Greets the signed-in user, if any, and links to the create and list pages.
#[derive(Template, WebTemplate)]
#[template(path = "homepage.html")]
pub struct HomeTemplate {
    pub username: Option<String>,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /home`
pub async fn home_handler(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    HomeTemplate {
        username: current_user(&headers, &state.session_service),
    }
}
