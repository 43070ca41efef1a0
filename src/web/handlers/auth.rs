//! Sign-up, sign-in and sign-out pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Redirect, Response},
};
use tracing::info;
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::web::error::PageError;
use crate::web::forms::{SignInForm, SignUpForm};
use crate::web::session::{clear_session_cookie, session_cookie};

/// Message shown for any failed sign-in, whatever the cause.
const SIGN_IN_FAILED: &str = "incorrect username or password";

/// Template for the sign-up form.
#[derive(Template, WebTemplate)]
#[template(path = "sign_up.html")]
pub struct SignUpTemplate {
    pub error: Option<String>,
    pub username: String,
    pub email: String,
}

/// Template for the sign-in form.
#[derive(Template, WebTemplate)]
#[template(path = "sign_in.html")]
pub struct SignInTemplate {
    pub error: Option<String>,
    pub username: String,
}

/// Renders the empty sign-up form.
///
/// # Endpoint
///
/// `GET /`
pub async fn sign_up_page() -> impl IntoResponse {
    SignUpTemplate {
        error: None,
        username: String::new(),
        email: String::new(),
    }
}

/// Registers a user and redirects to the sign-in page.
///
/// # Endpoint
///
/// `POST /`
///
/// Registering an existing username replaces that user. Invalid input
/// re-renders the form with the first validation message (400 Bad Request).
pub async fn sign_up_submit(
    State(state): State<AppState>,
    Form(form): Form<SignUpForm>,
) -> Result<Response, PageError> {
    let result = match form.validate() {
        Ok(()) => {
            state
                .user_service
                .sign_up(&form.username, &form.email, &form.password)
                .await
        }
        Err(errors) => Err(AppError::bad_request(
            first_message(&errors),
            serde_json::json!({}),
        )),
    };

    match result {
        Ok(()) => Ok(Redirect::to("/sign_in").into_response()),
        Err(AppError::Validation { message, .. }) => Ok((
            StatusCode::BAD_REQUEST,
            SignUpTemplate {
                error: Some(message),
                username: form.username,
                email: form.email,
            },
        )
            .into_response()),
        Err(e) => Err(e.into()),
    }
}

/// Renders the empty sign-in form.
///
/// # Endpoint
///
/// `GET /sign_in`
pub async fn sign_in_page() -> impl IntoResponse {
    SignInTemplate {
        error: None,
        username: String::new(),
    }
}

/// Checks the credentials, starts a session and redirects home.
///
/// # Endpoint
///
/// `POST /sign_in`
///
/// Unknown users and wrong passwords get the same message (401 Unauthorized).
pub async fn sign_in_submit(
    State(state): State<AppState>,
    Form(form): Form<SignInForm>,
) -> Result<Response, PageError> {
    if !state
        .user_service
        .sign_in(&form.username, &form.password)
        .await?
    {
        return Ok((
            StatusCode::UNAUTHORIZED,
            SignInTemplate {
                error: Some(SIGN_IN_FAILED.to_string()),
                username: form.username,
            },
        )
            .into_response());
    }

    info!("User {} signed in", form.username);

    let cookie = session_cookie(&state.session_service.sign(&form.username));
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/home")).into_response())
}

/// Ends the session and redirects to the sign-up page.
///
/// # Endpoint
///
/// `GET /sign_out`
pub async fn sign_out_handler() -> impl IntoResponse {
    ([(SET_COOKIE, clear_session_cookie())], Redirect::to("/"))
}

fn first_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid form".to_string())
}
