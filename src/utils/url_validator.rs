//! URL well-formedness check and hostname extraction.
//!
//! URLs are stored exactly as submitted; deduplication is by the literal
//! string, so nothing here rewrites the input.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LENGTH: usize = 2048;

/// Returns true if `input` is an absolute HTTP or HTTPS URL with a host.
///
/// The input must also be usable verbatim as a `Location` header: at most
/// [`MAX_URL_LENGTH`] bytes, with no whitespace or control characters.
/// `Url::parse` would otherwise strip tabs and newlines and accept it.
///
/// # Examples
///
/// ```
/// use shortly::utils::url_validator::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("javascript:alert(1)"));
/// assert!(!is_valid_url("example.com"));
/// ```
pub fn is_valid_url(input: &str) -> bool {
    if input.len() > MAX_URL_LENGTH
        || input.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}

/// Returns the network location (host and explicit port) of a URL.
///
/// Falls back to the input itself when it cannot be parsed, so templates can
/// always display something.
pub fn hostname(input: &str) -> String {
    let Ok(url) = Url::parse(input) else {
        return input.to_string();
    };

    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => input.to_string(),
    }
}
