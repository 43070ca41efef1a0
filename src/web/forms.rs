//! Form bodies submitted by the pages.
//!
//! Missing fields deserialize as empty strings so that they surface as
//! validation messages on the page instead of extractor rejections.

use serde::Deserialize;
use validator::Validate;

/// `POST /create`
#[derive(Debug, Deserialize)]
pub struct NewUrlForm {
    #[serde(default)]
    pub url: String,
}

/// `POST /`
#[derive(Debug, Deserialize, Validate)]
pub struct SignUpForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,

    #[serde(default)]
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// `POST /sign_in`
#[derive(Debug, Deserialize)]
pub struct SignInForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}
