//! Core domain entities.
//!
//! Entities are plain data assembled by the services from flat key-value
//! pairs; the store itself has no notion of records.
//!
//! - [`ShortLink`] - One allocated short identifier and its target
//! - [`LinkDetails`] - A short link together with its click count
//! - [`NewUser`] - Input for registering a user

pub mod link;
pub mod user;

pub use link::{LinkDetails, ShortLink};
pub use user::NewUser;
