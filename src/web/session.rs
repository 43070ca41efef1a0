//! Sign-in cookie helpers.

use axum::http::{HeaderMap, header::COOKIE};

use crate::application::services::SessionService;

/// Name of the sign-in cookie.
pub const SESSION_COOKIE: &str = "session";

/// Extracts a cookie value from the `Cookie` header.
///
/// Handles multiple cookies separated by semicolons and ignores the others.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(|cookie_str| {
            cookie_str.split(';').find_map(|cookie| {
                let (key, value) = cookie.trim().split_once('=')?;
                (key == name).then(|| value.to_string())
            })
        })
}

/// Returns the signed-in username, if the request carries a valid session.
pub fn current_user(headers: &HeaderMap, sessions: &SessionService) -> Option<String> {
    read_cookie(headers, SESSION_COOKIE).and_then(|value| sessions.verify(&value))
}

/// `Set-Cookie` value starting a session.
pub fn session_cookie(value: &str) -> String {
    format!("{SESSION_COOKIE}={value}; Path=/; HttpOnly; SameSite=Lax")
}

/// `Set-Cookie` value ending a session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_read_cookie_among_others() {
        let headers = headers("theme=dark; session=abc.def; lang=en");

        assert_eq!(read_cookie(&headers, "session").as_deref(), Some("abc.def"));
        assert_eq!(read_cookie(&headers, "lang").as_deref(), Some("en"));
        assert_eq!(read_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_read_cookie_without_header() {
        assert_eq!(read_cookie(&HeaderMap::new(), "session"), None);
    }

    #[test]
    fn test_current_user() {
        let sessions = SessionService::new("secret".to_string());
        let value = sessions.sign("alice");

        let signed_in = headers(&format!("session={value}"));
        assert_eq!(current_user(&signed_in, &sessions).as_deref(), Some("alice"));

        let forged = headers("session=alice.00");
        assert_eq!(current_user(&forged, &sessions), None);
    }

    #[test]
    fn test_clear_cookie_expires() {
        assert!(clear_session_cookie().contains("Max-Age=0"));
        assert!(session_cookie("v").starts_with("session=v;"));
    }
}
