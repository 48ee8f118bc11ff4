use std::fmt;

use reqwest::{
    header::{HeaderValue, InvalidHeaderValue},
    Url,
};

use super::LoginError;
use crate::http::CookieStore;

/// Cookie the portal issues the CSRF token in.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";
/// Header every authenticated request must echo the token in, `X-XSRF-TOKEN`.
///
/// Lowercase, as header names are stored normalized.
pub const XSRF_HEADER: &str = "x-xsrf-token";

/// CSRF token captured from the portal's `XSRF-TOKEN` cookie.
///
/// The header value is marked sensitive, so the transport never logs it.
#[derive(Clone, PartialEq, Eq)]
pub struct XsrfToken {
    value: String,
    header: HeaderValue,
}

impl XsrfToken {
    /// Wraps a token value as issued by the portal.
    ///
    /// Fails if the value cannot be sent in a header.
    pub fn new(value: &str) -> Result<Self, InvalidHeaderValue> {
        let mut header = HeaderValue::from_str(value)?;
        header.set_sensitive(true);
        Ok(Self {
            value: value.to_string(),
            header,
        })
    }

    /// Reads the token the store would send to `portal_url`.
    ///
    /// Returns None if the portal never issued one, or if it has expired.
    pub fn from_cookie_store(
        store: &dyn CookieStore,
        portal_url: &Url,
    ) -> Result<Option<Self>, LoginError> {
        match store.get_cookie(portal_url, XSRF_COOKIE)? {
            Some(cookie) => Ok(Some(Self::new(&cookie.value)?)),
            None => Ok(None),
        }
    }

    /// The raw token value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The token as a header value.
    pub fn header_value(&self) -> &HeaderValue {
        &self.header
    }
}

impl fmt::Debug for XsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("XsrfToken(********)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{Cookie, InMemoryCookieStore};

    #[test]
    fn test_from_cookie_store() {
        let store = InMemoryCookieStore::new();
        let url = Url::parse("https://customerconnect.vmware.com").unwrap();
        store
            .set_cookie(&url, Cookie::new(XSRF_COOKIE, "tok1"))
            .unwrap();

        let token = XsrfToken::from_cookie_store(&store, &url).unwrap().unwrap();

        assert_eq!(token.as_str(), "tok1");
        assert!(token.header_value().is_sensitive());
    }

    #[test]
    fn test_from_cookie_store_ignores_other_hosts() {
        let store = InMemoryCookieStore::new();
        let identity = Url::parse("https://auth.vmware.com").unwrap();
        let portal = Url::parse("https://customerconnect.vmware.com").unwrap();
        store
            .set_cookie(&identity, Cookie::new(XSRF_COOKIE, "tok1"))
            .unwrap();

        assert!(XsrfToken::from_cookie_store(&store, &portal)
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_unusable_token_value() {
        let store = InMemoryCookieStore::new();
        let url = Url::parse("https://customerconnect.vmware.com").unwrap();
        store
            .set_cookie(&url, Cookie::new(XSRF_COOKIE, "tok\u{7f}1"))
            .unwrap();

        let result = XsrfToken::from_cookie_store(&store, &url);

        assert!(matches!(result, Err(LoginError::InvalidXsrfToken(_))));
    }

    #[test]
    fn test_non_ascii_token_keeps_its_value() {
        let token = XsrfToken::new("tok\u{e9}1").unwrap();

        assert_eq!(token.as_str(), "tok\u{e9}1");
        assert_eq!(token.header_value().as_bytes(), "tok\u{e9}1".as_bytes());
    }

    #[test]
    fn test_debug_redacts_value() {
        let token = XsrfToken::new("tok1").unwrap();

        assert!(!format!("{token:?}").contains("tok1"));
    }
}
