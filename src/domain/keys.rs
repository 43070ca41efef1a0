//! Key naming scheme for everything persisted in the key-value store.
//!
//! Other processes may share the same store, so these names are part of the
//! persisted-state contract and must not change.

/// Shared counter used to allocate new short identifiers.
pub const LAST_URL_ID: &str = "last-url-id";

const URL_TARGET_PREFIX: &str = "url-target:";
const REVERSE_URL_PREFIX: &str = "reverse-url:";
const CLICK_COUNT_PREFIX: &str = "click-count:";
const EMAIL_PREFIX: &str = "email:";

/// Forward mapping: short identifier -> target URL.
pub fn url_target(short_id: &str) -> String {
    format!("{URL_TARGET_PREFIX}{short_id}")
}

/// Reverse mapping: target URL -> short identifier.
pub fn reverse_url(url: &str) -> String {
    format!("{REVERSE_URL_PREFIX}{url}")
}

/// Click counter for a short identifier.
pub fn click_count(short_id: &str) -> String {
    format!("{CLICK_COUNT_PREFIX}{short_id}")
}

/// Password hash of a user. Usernames are stored as bare keys.
pub fn user_password(username: &str) -> String {
    username.to_string()
}

/// Email address of a user.
pub fn user_email(username: &str) -> String {
    format!("{EMAIL_PREFIX}{username}")
}

/// Returns true if `key` belongs to the application namespace.
///
/// Used to reject usernames that would overwrite counters or mappings.
pub fn is_reserved(key: &str) -> bool {
    key == LAST_URL_ID
        || [
            URL_TARGET_PREFIX,
            REVERSE_URL_PREFIX,
            CLICK_COUNT_PREFIX,
            EMAIL_PREFIX,
        ]
        .iter()
        .any(|prefix| key.starts_with(prefix))
}
