//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{ClickService, LinkService, SessionService, UserService};
use crate::config::Config;
use crate::domain::store::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub link_service: Arc<LinkService<dyn KeyValueStore>>,
    pub click_service: Arc<ClickService<dyn KeyValueStore>>,
    pub user_service: Arc<UserService<dyn KeyValueStore>>,
    pub session_service: Arc<SessionService>,
    /// Public origin used to build absolute short URLs.
    pub base_url: String,
}

impl AppState {
    /// Wires every service to the same store.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        session_secret: String,
        bcrypt_cost: u32,
        base_url: String,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone())),
            click_service: Arc::new(ClickService::new(store.clone())),
            user_service: Arc::new(UserService::with_cost(store.clone(), bcrypt_cost)),
            session_service: Arc::new(SessionService::new(session_secret)),
            store,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builds the state described by `config` on top of an already connected store.
    pub fn from_config(store: Arc<dyn KeyValueStore>, config: &Config) -> Self {
        Self::new(
            store,
            config.session_secret.clone(),
            config.bcrypt_cost,
            config.base_url.clone(),
        )
    }

    /// Absolute URL of a short identifier.
    pub fn short_url(&self, short_id: &str) -> String {
        format!("{}/{}", self.base_url, short_id)
    }
}
