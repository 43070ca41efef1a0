//! HTML rendering of application errors.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Template for unknown pages and short identifiers.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {}

/// Template for every other failure.
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub message: String,
}

/// An [`AppError`] raised while rendering a page.
///
/// Renders `404.html` for not-found errors and `error.html` otherwise. Details
/// of internal errors are never shown.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();

        match self.0 {
            AppError::NotFound { .. } => (status, NotFoundTemplate {}).into_response(),
            AppError::Internal { .. } => (
                status,
                ErrorTemplate {
                    status: status.as_u16(),
                    message: "Something went wrong on our side.".to_string(),
                },
            )
                .into_response(),
            AppError::Validation { message, .. } | AppError::Unauthorized { message, .. } => (
                status,
                ErrorTemplate {
                    status: status.as_u16(),
                    message,
                },
            )
                .into_response(),
        }
    }
}

/// Fallback for paths no route matches.
pub async fn not_found_handler() -> impl IntoResponse {
    PageError(AppError::not_found("Page not found", serde_json::json!({})))
}
