//! Signed sign-in sessions.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Issues and checks the value of the sign-in cookie.
///
/// A session value is `<username>.<mac>` where `mac` is the hex HMAC-SHA256
/// of the username keyed by the server secret. Nothing is stored server-side;
/// a value is valid for as long as the secret does not change.
pub struct SessionService {
    secret: String,
}

impl SessionService {
    /// Creates a session service.
    ///
    /// `secret` must stay the same across restarts for existing sessions to
    /// remain valid.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    fn mac(&self, username: &str) -> HmacSha256 {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(username.as_bytes());
        mac
    }

    /// Returns the signed session value for `username`.
    pub fn sign(&self, username: &str) -> String {
        let signature = hex::encode(self.mac(username).finalize().into_bytes());
        format!("{username}.{signature}")
    }

    /// Returns the username of a valid session value.
    ///
    /// The MAC comparison is constant-time.
    pub fn verify(&self, value: &str) -> Option<String> {
        let (username, signature) = value.rsplit_once('.')?;
        let signature = hex::decode(signature).ok()?;

        self.mac(username).verify_slice(&signature).ok()?;

        Some(username.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SessionService {
        SessionService::new("test-session-secret".to_string())
    }

    #[test]
    fn test_sign_and_verify() {
        let service = service();
        let value = service.sign("alice");

        assert!(value.starts_with("alice."));
        assert_eq!(value.len(), "alice.".len() + 64);
        assert_eq!(service.verify(&value).as_deref(), Some("alice"));
    }

    #[test]
    fn test_username_with_dots() {
        let service = service();
        let value = service.sign("a.b.c");

        assert_eq!(service.verify(&value).as_deref(), Some("a.b.c"));
    }

    #[test]
    fn test_tampered_username_rejected() {
        let service = service();
        let value = service.sign("alice");
        let forged = value.replacen("alice", "admin", 1);

        assert_eq!(service.verify(&forged), None);
    }

    #[test]
    fn test_malformed_values_rejected() {
        let service = service();

        assert_eq!(service.verify(""), None);
        assert_eq!(service.verify("alice"), None);
        assert_eq!(service.verify("alice.zz"), None);
        assert_eq!(service.verify("alice."), None);
    }

    #[test]
    fn test_secret_matters() {
        let value = SessionService::new("secret-a".to_string()).sign("alice");

        assert_eq!(SessionService::new("secret-b".to_string()).verify(&value), None);
    }
}
