//! HTML pages for shortening, following and listing links, plus sign-up and sign-in.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers
//! - [`forms`] - Form bodies submitted by the pages
//! - [`session`] - Sign-in cookie helpers
//! - [`error`] - HTML rendering of [`crate::error::AppError`]
//! - [`routes`] - Page route configuration

pub mod error;
pub mod forms;
pub mod handlers;
pub mod routes;
pub mod session;
