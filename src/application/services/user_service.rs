//! User registration and password verification.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::entities::NewUser;
use crate::domain::keys;
use crate::domain::store::KeyValueStore;
use crate::error::AppError;

/// Usernames are stored as bare keys, so they are restricted to a safe subset.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]{1,64}$").unwrap());

/// Service for registering users and checking their passwords.
///
/// Each user is two keys: `<username>` holds the bcrypt hash and
/// `email:<username>` the email address. Registering an existing username
/// replaces both.
pub struct UserService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
    bcrypt_cost: u32,
}

impl<S: KeyValueStore + ?Sized> UserService<S> {
    /// Creates a user service hashing with [`bcrypt::DEFAULT_COST`].
    pub fn new(store: Arc<S>) -> Self {
        Self::with_cost(store, bcrypt::DEFAULT_COST)
    }

    /// Creates a user service with an explicit bcrypt cost.
    pub fn with_cost(store: Arc<S>, bcrypt_cost: u32) -> Self {
        Self { store, bcrypt_cost }
    }

    /// Stores a user record, overwriting any previous one with the same name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn register(&self, user: NewUser) -> Result<(), AppError> {
        self.store
            .set(&keys::user_password(&user.username), &user.password_hash)
            .await?;
        self.store
            .set(&keys::user_email(&user.username), &user.email)
            .await?;

        info!("Registered user {}", user.username);
        Ok(())
    }

    /// Returns the stored password hash of `username`, if the user exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn authenticate(&self, username: &str) -> Result<Option<String>, AppError> {
        let key = keys::user_password(username);

        if !self.store.exists(&key).await? {
            return Ok(None);
        }

        Ok(self.store.get(&key).await?)
    }

    /// Returns the stored email of `username`.
    pub async fn email(&self, username: &str) -> Result<Option<String>, AppError> {
        Ok(self.store.get(&keys::user_email(username)).await?)
    }

    /// Validates the username, hashes the password and registers the user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is not 1-64 characters
    /// of `[A-Za-z0-9_.-]`, collides with an application key, or the password
    /// is empty. Returns [`AppError::Internal`] on hashing or store errors.
    pub async fn sign_up(&self, username: &str, email: &str, password: &str) -> Result<(), AppError> {
        validate_username(username)?;

        if password.is_empty() {
            return Err(AppError::bad_request(
                "Password must not be empty",
                json!({ "field": "password" }),
            ));
        }

        let password_hash = self.hash_password(password).await?;

        self.register(NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await
    }

    /// Checks a password against the stored hash.
    ///
    /// Unknown users and stored values that are not bcrypt hashes both count as
    /// a failed sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<bool, AppError> {
        let Some(stored_hash) = self.authenticate(username).await? else {
            return Ok(false);
        };

        let password = password.to_owned();
        let verified = tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash))
            .await
            .map_err(|e| {
                AppError::internal("Password verification failed", json!({ "reason": e.to_string() }))
            })?;

        match verified {
            Ok(matches) => Ok(matches),
            Err(e) => {
                warn!("Stored password of {} is not a bcrypt hash: {}", username, e);
                Ok(false)
            }
        }
    }

    async fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let password = password.to_owned();
        let cost = self.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))?
            .map_err(|e| AppError::internal("Password hashing failed", json!({ "reason": e.to_string() })))
    }
}

/// Checks that a username is safe to use as a store key.
///
/// # Errors
///
/// Returns [`AppError::Validation`] describing the violated rule.
pub fn validate_username(username: &str) -> Result<(), AppError> {
    if !USERNAME_REGEX.is_match(username) {
        return Err(AppError::bad_request(
            "Username must be 1-64 letters, digits, '.', '_' or '-'",
            json!({ "username": username }),
        ));
    }

    if keys::is_reserved(username) {
        return Err(AppError::bad_request(
            "This username is reserved",
            json!({ "username": username }),
        ));
    }

    Ok(())
}
