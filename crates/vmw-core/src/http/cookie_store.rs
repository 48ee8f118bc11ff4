use reqwest::Url;

use super::{Cookie, CookieError};

/// Abstraction for cookie storage backends.
///
/// The store is consulted by the HTTP transport on every request and every redirect hop, so the
/// methods are synchronous. Implementations must be safe to share between concurrent requests
/// of one session.
///
/// A store must not be shared between two logins running at the same time: the handshake clears
/// it and relies on the cookies of its own previous steps.
pub trait CookieStore: Send + Sync {
    /// Retrieves the cookie named `name` that would be sent to `url`.
    ///
    /// Returns None if no matching, non-expired cookie exists. When several match, the one with
    /// the longest path wins.
    fn get_cookie(&self, url: &Url, name: &str) -> Result<Option<Cookie>, CookieError>;

    /// Stores a cookie received from `url`.
    ///
    /// Replaces a cookie with the same name, domain and path. An already expired cookie removes
    /// the stored one.
    fn set_cookie(&self, url: &Url, cookie: Cookie) -> Result<(), CookieError>;

    /// Removes every cookie named `name`.
    ///
    /// Returns Ok even if cookie doesn't exist (idempotent operation).
    fn remove_cookie(&self, name: &str) -> Result<(), CookieError>;

    /// Clears all stored cookies.
    fn clear(&self) -> Result<(), CookieError>;

    /// Lists the non-expired cookies that would be sent to `url`, longest path first.
    fn list_cookies(&self, url: &Url) -> Result<Vec<Cookie>, CookieError>;
}
