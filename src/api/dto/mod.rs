//! Data Transfer Objects for the JSON API.

pub mod health;
pub mod links;
pub mod shorten;
