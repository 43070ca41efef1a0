//! Infrastructure layer for external integrations.
//!
//! Implements the storage contract defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory [`crate::domain::store::KeyValueStore`] implementations

pub mod store;
