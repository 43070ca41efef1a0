//! Short identifier allocation, lookup and listing.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info};

use crate::application::services::click_service::{ClickService, parse_count};
use crate::domain::entities::{LinkDetails, ShortLink};
use crate::domain::keys;
use crate::domain::store::KeyValueStore;
use crate::error::AppError;
use crate::utils::codec::encode;
use crate::utils::url_validator::is_valid_url;

/// Service for creating and resolving short identifiers.
///
/// Each distinct URL is stored twice: a forward entry (`url-target:<id>`)
/// used for redirects and a reverse entry (`reverse-url:<url>`) used to hand
/// out the same identifier when the URL is submitted again.
pub struct LinkService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    clicks: ClickService<S>,
}

impl<S: KeyValueStore + ?Sized> LinkService<S> {
    /// Creates a new link service.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            clicks: ClickService::new(store.clone()),
            store,
        }
    }

    /// Validates `url` and returns its short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with the message `invalid url` if the
    /// URL is not an absolute HTTP(S) URL. See [`Self::insert`] for the rest.
    pub async fn shorten(&self, url: &str) -> Result<String, AppError> {
        if !is_valid_url(url) {
            return Err(AppError::bad_request("invalid url", json!({ "url": url })));
        }

        self.insert(url).await
    }

    /// Returns the short identifier for `url`, allocating one if needed.
    ///
    /// # Deduplication
    ///
    /// If the reverse mapping already exists its identifier is returned and
    /// nothing is written. Otherwise the shared counter is incremented, the new
    /// value encoded, and both mappings are written.
    ///
    /// The existence check and the increment are separate store calls, so two
    /// concurrent first submissions of the same URL can both allocate. The
    /// later reverse write wins and the earlier identifier stays resolvable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn insert(&self, url: &str) -> Result<String, AppError> {
        let reverse_key = keys::reverse_url(url);

        if let Some(short_id) = self.store.get(&reverse_key).await? {
            debug!("Reusing short id {} for {}", short_id, url);
            return Ok(short_id);
        }

        let url_num = self.store.increment(keys::LAST_URL_ID).await?;
        let url_num = u64::try_from(url_num).map_err(|_| {
            AppError::internal(
                "URL counter is negative",
                json!({ "key": keys::LAST_URL_ID, "value": url_num }),
            )
        })?;

        let short_id = encode(url_num);
        self.store.set(&keys::url_target(&short_id), url).await?;
        self.store.set(&reverse_key, &short_id).await?;

        info!("Allocated short id {} for {}", short_id, url);

        Ok(short_id)
    }

    /// Resolves a short identifier to its target URL.
    ///
    /// Unknown identifiers yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn lookup(&self, short_id: &str) -> Result<Option<String>, AppError> {
        Ok(self.store.get(&keys::url_target(short_id)).await?)
    }

    /// Resolves a short identifier or fails with [`AppError::NotFound`].
    pub async fn get_target(&self, short_id: &str) -> Result<String, AppError> {
        self.lookup(short_id).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "short_id": short_id }))
        })
    }

    /// Returns the target URL and click count of a short identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the identifier is unknown.
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn details(&self, short_id: &str) -> Result<LinkDetails, AppError> {
        let long_url = self.get_target(short_id).await?;
        let click_count = self.clicks.get(short_id).await?;

        Ok(LinkDetails {
            short_id: short_id.to_string(),
            long_url,
            click_count,
        })
    }

    /// Number of identifiers allocated so far (the current counter value).
    pub async fn link_count(&self) -> Result<u64, AppError> {
        let value = self.store.get(keys::LAST_URL_ID).await?;
        parse_count(keys::LAST_URL_ID, value)
    }

    /// Lists every allocated link, newest first.
    ///
    /// Walks the counter range from its current value down to 1. Allocation is
    /// assumed to be dense: an id in that range without a forward mapping is
    /// reported as an error rather than skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors or a missing mapping.
    pub async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let last = self.link_count().await?;
        let mut links = Vec::new();

        for id in (1..=last).rev() {
            let short_id = encode(id);
            let long_url = self.lookup(&short_id).await?.ok_or_else(|| {
                AppError::internal(
                    "Missing forward mapping",
                    json!({ "id": id, "short_id": short_id }),
                )
            })?;

            links.push(ShortLink::new(id, short_id, long_url));
        }

        Ok(links)
    }
}
