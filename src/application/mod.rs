//! Application layer services implementing the shortener's operations.
//!
//! Services turn single-key store calls into the operations used by the web
//! pages, the JSON API and the admin CLI. They hold no state of their own
//! between calls; every read goes back to the store.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short identifier allocation, lookup and listing
//! - [`services::click_service::ClickService`] - Per-identifier click counting
//! - [`services::user_service::UserService`] - Registration and password checks
//! - [`services::session_service::SessionService`] - Signed sign-in cookies

pub mod services;
