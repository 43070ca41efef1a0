//! Domain layer containing business entities and the storage contract.
//!
//! Nothing in here knows about HTTP or about a concrete store. The services in
//! [`crate::application::services`] combine these pieces into the operations
//! exposed by the web pages, the JSON API and the admin CLI.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data returned by the services
//! - [`keys`] - The persisted key naming scheme
//! - [`store`] - The [`store::KeyValueStore`] capability trait

pub mod entities;
pub mod keys;
pub mod store;
