//! Business logic services for the application layer.

pub mod click_service;
pub mod link_service;
pub mod session_service;
pub mod user_service;

pub use click_service::ClickService;
pub use link_service::LinkService;
pub use session_service::SessionService;
pub use user_service::UserService;
