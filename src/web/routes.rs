//! Page route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    home_handler, list_handler, new_url_page, new_url_submit, short_link_handler, sign_in_page,
    sign_in_submit, sign_out_handler, sign_up_page, sign_up_submit,
};
use axum::{Router, routing::get};

/// All page routes. None of them require a session.
///
/// # Endpoints
///
/// - `GET|POST /`               - Sign-up form
/// - `GET      /home`           - Home page
/// - `GET|POST /create`         - Shorten a URL
/// - `GET      /short_link_list` - Every link, newest first
/// - `GET|POST /sign_in`        - Sign-in form
/// - `GET      /sign_out`       - Clear the session
/// - `GET      /{short_id}`     - Follow a link (or `/{short_id}_details` for its details)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(sign_up_page).post(sign_up_submit))
        .route("/home", get(home_handler))
        .route("/create", get(new_url_page).post(new_url_submit))
        .route("/short_link_list", get(list_handler))
        .route("/sign_in", get(sign_in_page).post(sign_in_submit))
        .route("/sign_out", get(sign_out_handler))
        .route("/{short_id}", get(short_link_handler))
}
