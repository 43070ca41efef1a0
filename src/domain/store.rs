//! Capability contract for the external key-value store.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a [`KeyValueStore`] implementation.
///
/// None of these are retried or recovered from; they propagate to the HTTP
/// boundary and become a generic server error.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),
    #[error("store command failed: {0}")]
    Command(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Single-key operations the application needs from its store.
///
/// Keys are UTF-8 strings and values are read back as UTF-8 text. The only
/// atomicity the application relies on is [`KeyValueStore::increment`]; every
/// other multi-step sequence may interleave with concurrent callers.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis, shared between processes
/// - [`crate::infrastructure::store::MemoryStore`] - In-process map for development and tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored at `key`, or `None` if the key does not exist.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` at `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Returns whether `key` exists.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Atomically increments the integer at `key` and returns the new value.
    ///
    /// A missing key counts as 0, so the first call returns 1.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidData`] if the stored value is not an integer.
    async fn increment(&self, key: &str) -> StoreResult<i64>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
