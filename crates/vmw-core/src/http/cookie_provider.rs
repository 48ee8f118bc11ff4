use std::sync::Arc;

use reqwest::{header::HeaderValue, Url};

use super::{Cookie, CookieStore};

/// Bridges a [`CookieStore`] into reqwest's cookie handling.
///
/// reqwest consults the provider for every request it sends, including each hop of a redirect
/// chain, and hands it every `Set-Cookie` header it receives. A request-level middleware would
/// only see the first request and the final response, losing the cookies the SSO exchange sets
/// on intermediate redirects.
pub struct CookieProvider {
    cookie_store: Arc<dyn CookieStore>,
}

impl CookieProvider {
    /// Creates a new provider backed by `cookie_store`.
    pub fn new(cookie_store: Arc<dyn CookieStore>) -> Self {
        Self { cookie_store }
    }
}

impl reqwest::cookie::CookieStore for CookieProvider {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        for header in cookie_headers {
            let cookie = header
                .to_str()
                .map_err(|e| e.to_string())
                .and_then(|h| Cookie::parse_set_cookie(h).map_err(|e| e.to_string()));

            match cookie {
                Ok(cookie) => {
                    let name = cookie.name.clone();
                    if let Err(e) = self.cookie_store.set_cookie(url, cookie) {
                        tracing::warn!(cookie_name = %name, "Failed to store cookie: {e}");
                    }
                }
                Err(e) => {
                    tracing::warn!(url = %url, "Ignoring unparsable Set-Cookie header: {e}");
                }
            }
        }
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        let cookies = match self.cookie_store.list_cookies(url) {
            Ok(cookies) => cookies,
            Err(e) => {
                tracing::warn!("Failed to retrieve cookies from store: {e}");
                return None;
            }
        };

        if cookies.is_empty() {
            return None;
        }

        let header = cookies
            .iter()
            .map(Cookie::to_cookie_header)
            .collect::<Vec<_>>()
            .join("; ");

        match HeaderValue::from_str(&header) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Failed to build cookie header: {e}");
                None
            }
        }
    }
}
