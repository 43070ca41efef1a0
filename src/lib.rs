//! # Shortly
//!
//! A small URL shortener built with Axum on top of a key-value store (Redis,
//! or an in-process map for development).
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, key layout and the store trait
//! - **Application Layer** ([`application`]) - Links, clicks, users and sessions
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - JSON endpoints, DTOs and middleware
//! - **Web Layer** ([`web`]) - HTML pages rendered with Askama
//!
//! ## Features
//!
//! - Sequential base36 short identifiers, one per distinct URL
//! - Click counting on every redirect
//! - Sign-up and sign-in with bcrypt password hashes and signed cookies
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"
//! export SESSION_SECRET="change-me"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        ClickService, LinkService, SessionService, UserService,
    };
    pub use crate::domain::entities::{LinkDetails, NewUser, ShortLink};
    pub use crate::domain::store::{KeyValueStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore};
    pub use crate::state::AppState;
}
