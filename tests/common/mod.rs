#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::{HeaderName, HeaderValue, header::COOKIE};
use axum_test::TestServer;
use shortly::domain::store::{KeyValueStore, StoreError, StoreResult};
use shortly::infrastructure::store::MemoryStore;
use shortly::routes::app_routes;
use shortly::state::AppState;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

/// Lowest bcrypt cost, to keep sign-up tests fast.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_state(store: Arc<dyn KeyValueStore>) -> AppState {
    AppState::new(
        store,
        "test-session-secret".to_string(),
        TEST_BCRYPT_COST,
        BASE_URL.to_string(),
    )
}

/// Full application over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = server_with_store(store.clone());
    (server, store)
}

pub fn server_with_store(store: Arc<dyn KeyValueStore>) -> TestServer {
    TestServer::new(app_routes(create_test_state(store))).unwrap()
}

pub fn cookie_header(value: &str) -> (HeaderName, HeaderValue) {
    (COOKIE, HeaderValue::from_str(value).unwrap())
}

/// Store whose every command fails, as if Redis were down.
pub struct UnavailableStore;

fn unavailable() -> StoreError {
    StoreError::Connection("connection refused".to_string())
}

#[async_trait]
impl KeyValueStore for UnavailableStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(unavailable())
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(unavailable())
    }

    async fn exists(&self, _key: &str) -> StoreResult<bool> {
        Err(unavailable())
    }

    async fn increment(&self, _key: &str) -> StoreResult<i64> {
        Err(unavailable())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(unavailable())
    }
}
