//! Click counting service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::keys;
use crate::domain::store::KeyValueStore;
use crate::error::AppError;

/// Counts how often each short identifier has been followed.
///
/// Counters are created lazily by the first increment; reading a counter that
/// was never incremented yields 0.
pub struct ClickService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
}

impl<S: KeyValueStore + ?Sized> ClickService<S> {
    /// Creates a new click service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Records one click on `short_id` and returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store fails or the stored counter
    /// is not an integer.
    pub async fn increment(&self, short_id: &str) -> Result<u64, AppError> {
        let key = keys::click_count(short_id);
        let count = self.store.increment(&key).await?;
        debug!("Click on {} (total {})", short_id, count);
        to_count(&key, count)
    }

    /// Returns the number of clicks recorded for `short_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors or a malformed counter.
    pub async fn get(&self, short_id: &str) -> Result<u64, AppError> {
        let key = keys::click_count(short_id);
        let value = self.store.get(&key).await?;
        parse_count(&key, value)
    }
}

/// Parses a stored counter, treating an absent key as 0.
pub(crate) fn parse_count(key: &str, value: Option<String>) -> Result<u64, AppError> {
    match value {
        None => Ok(0),
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            AppError::internal(
                "Stored counter is not a non-negative integer",
                json!({ "key": key, "value": raw }),
            )
        }),
    }
}

fn to_count(key: &str, value: i64) -> Result<u64, AppError> {
    u64::try_from(value).map_err(|_| {
        AppError::internal(
            "Stored counter is negative",
            json!({ "key": key, "value": value }),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::store::{MockKeyValueStore, StoreError};
    use crate::infrastructure::store::MemoryStore;

    #[tokio::test]
    async fn test_get_defaults_to_zero() {
        let service = ClickService::new(Arc::new(MemoryStore::new()));

        assert_eq!(service.get("abc").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_n_times() {
        let service = ClickService::new(Arc::new(MemoryStore::new()));

        for expected in 1..=5 {
            assert_eq!(service.increment("abc").await.unwrap(), expected);
        }

        assert_eq!(service.get("abc").await.unwrap(), 5);
        assert_eq!(service.get("other").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_increment_uses_click_count_key() {
        let mut mock_store = MockKeyValueStore::new();

        mock_store
            .expect_increment()
            .withf(|key| key == "click-count:1a")
            .times(1)
            .returning(|_| Ok(7));

        let service = ClickService::new(Arc::new(mock_store));

        assert_eq!(service.increment("1a").await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_get_malformed_counter() {
        let mut mock_store = MockKeyValueStore::new();

        mock_store
            .expect_get()
            .times(1)
            .returning(|_| Ok(Some("lots".to_string())));

        let service = ClickService::new(Arc::new(mock_store));

        let result = service.get("1a").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let mut mock_store = MockKeyValueStore::new();

        mock_store
            .expect_increment()
            .times(1)
            .returning(|_| Err(StoreError::Connection("refused".to_string())));

        let service = ClickService::new(Arc::new(mock_store));

        let result = service.increment("1a").await;
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("k", None).unwrap(), 0);
        assert_eq!(parse_count("k", Some("42".to_string())).unwrap(), 42);
        assert!(parse_count("k", Some("-1".to_string())).is_err());
    }
}
