//! Short link entities.

use serde::Serialize;

use crate::utils::url_validator::hostname;

/// A short identifier allocated from the shared counter.
///
/// `id` is the counter value the identifier was encoded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortLink {
    pub id: u64,
    pub short_id: String,
    pub long_url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: u64, short_id: String, long_url: String) -> Self {
        Self {
            id,
            short_id,
            long_url,
        }
    }

    /// Host part of the target URL, or the whole URL if it has none.
    pub fn hostname(&self) -> String {
        hostname(&self.long_url)
    }
}

/// A short link with its click count, as shown on the details page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDetails {
    pub short_id: String,
    pub long_url: String,
    pub click_count: u64,
}

impl LinkDetails {
    /// Host part of the target URL, or the whole URL if it has none.
    pub fn hostname(&self) -> String {
        hostname(&self.long_url)
    }
}
