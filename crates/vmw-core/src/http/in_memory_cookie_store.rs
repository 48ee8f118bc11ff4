use std::{
    collections::HashMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use reqwest::Url;

use super::{Cookie, CookieError, CookieStore};

/// Cookies are unique per (domain, path, name).
type CookieKey = (String, String, String);

/// In-memory cookie storage using HashMap with RwLock for thread-safe access.
///
/// Optimized for read-heavy workloads (concurrent requests reading the session cookies).
/// Lives as long as the process; nothing is written to disk.
#[derive(Debug, Default)]
pub struct InMemoryCookieStore {
    cookies: RwLock<HashMap<CookieKey, Cookie>>,
}

impl InMemoryCookieStore {
    /// Creates a new empty in-memory cookie store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<CookieKey, Cookie>>, CookieError> {
        self.cookies
            .read()
            .map_err(|e| CookieError::StorageFailure(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<CookieKey, Cookie>>, CookieError> {
        self.cookies
            .write()
            .map_err(|e| CookieError::StorageFailure(e.to_string()))
    }
}

fn key(cookie: &Cookie) -> CookieKey {
    (
        cookie.domain.clone().unwrap_or_default(),
        cookie.path.clone().unwrap_or_else(|| "/".to_string()),
        cookie.name.clone(),
    )
}

impl CookieStore for InMemoryCookieStore {
    fn get_cookie(&self, url: &Url, name: &str) -> Result<Option<Cookie>, CookieError> {
        Ok(self
            .list_cookies(url)?
            .into_iter()
            .find(|c| c.name == name))
    }

    fn set_cookie(&self, url: &Url, cookie: Cookie) -> Result<(), CookieError> {
        // Validates domain and prefix rules before storing
        let cookie = cookie.scope_to(url)?;

        let mut cookies = self.write()?;
        if cookie.is_expired() {
            cookies.remove(&key(&cookie));
        } else {
            cookies.insert(key(&cookie), cookie);
        }
        Ok(())
    }

    fn remove_cookie(&self, name: &str) -> Result<(), CookieError> {
        let mut cookies = self.write()?;
        cookies.retain(|(_, _, n), _| n != name);
        Ok(())
    }

    fn clear(&self) -> Result<(), CookieError> {
        let mut cookies = self.write()?;
        cookies.clear();
        Ok(())
    }

    fn list_cookies(&self, url: &Url) -> Result<Vec<Cookie>, CookieError> {
        let cookies = self.read()?;
        let mut matching: Vec<Cookie> = cookies
            .values()
            .filter(|c| c.matches(url))
            .cloned()
            .collect();

        // RFC 6265 ordering: longer paths first
        matching.sort_by_key(|c| std::cmp::Reverse(c.path.as_ref().map_or(0, String::len)));
        Ok(matching)
    }
}
