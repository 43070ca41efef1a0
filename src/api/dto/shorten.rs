//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};

/// Request to shorten a URL.
///
/// The URL is checked by [`crate::application::services::LinkService::shorten`],
/// the same rule the `/create` page applies.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten (must be an absolute HTTP/HTTPS URL).
    pub url: String,
}

/// Identifier allocated (or reused) for the submitted URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_id: String,
    pub short_url: String,
    pub long_url: String,
}
