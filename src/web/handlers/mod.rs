//! Page handlers.

mod auth;
mod follow;
mod home;
mod links;

pub use auth::{sign_in_page, sign_in_submit, sign_out_handler, sign_up_page, sign_up_submit};
pub use follow::short_link_handler;
pub use home::home_handler;
pub use links::{list_handler, new_url_page, new_url_submit};
