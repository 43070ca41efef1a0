//! Redis-backed key-value store.

use crate::domain::store::{KeyValueStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis implementation of [`KeyValueStore`].
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Errors are not swallowed: every failed command is returned to the caller.
#[derive(Clone)]
pub struct RedisStore {
    client: ConnectionManager,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> StoreResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self { client: manager };
        store.ping().await?;

        info!("Connected to Redis");

        Ok(store)
    }
}

fn command_error(op: &str, key: &str, e: redis::RedisError) -> StoreError {
    StoreError::Command(format!("{op} {key}: {e}"))
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.client.clone();
        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| command_error("GET", key, e))?;

        debug!("GET {} -> {}", key, if value.is_some() { "hit" } else { "miss" });
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| command_error("SET", key, e))?;

        debug!("SET {}", key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.client.clone();
        conn.exists::<_, bool>(key)
            .await
            .map_err(|e| command_error("EXISTS", key, e))
    }

    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.client.clone();
        let value = conn
            .incr::<_, _, i64>(key, 1)
            .await
            .map_err(|e| command_error("INCR", key, e))?;

        debug!("INCR {} -> {}", key, value);
        Ok(value)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.client.clone();
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))
    }
}
