//! DTOs for the link endpoints.

use serde::Serialize;

use crate::domain::entities::ShortLink;

/// One entry of the link listing.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: u64,
    pub short_id: String,
    pub long_url: String,
}

impl From<ShortLink> for LinkItem {
    fn from(link: ShortLink) -> Self {
        Self {
            id: link.id,
            short_id: link.short_id,
            long_url: link.long_url,
        }
    }
}

/// Every allocated link, newest first.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub total: usize,
    pub items: Vec<LinkItem>,
}

/// Target and click count of one link.
#[derive(Debug, Serialize)]
pub struct LinkDetailsResponse {
    pub short_id: String,
    pub short_url: String,
    pub long_url: String,
    pub click_count: u64,
}
