//! User entity.

/// Input data for registering a user.
///
/// `password_hash` is opaque to the store; it is produced and checked by
/// [`crate::application::services::UserService`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
