use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

use reqwest::Url;

use super::{LoginError, LoginState, XsrfToken};
use crate::{http::CookieStore, ClientSettings};

/// Expiry flag shared by every request of one session.
///
/// Set once, on the first 401. Never cleared: an expired session is replaced by a new login.
#[derive(Debug, Default)]
pub struct SessionExpiry(AtomicBool);

impl SessionExpiry {
    /// Creates a flag for a live session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once the portal has answered 401.
    pub fn is_expired(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the session expired.
    pub fn mark_expired(&self) {
        if !self.0.swap(true, Ordering::AcqRel) {
            tracing::info!(state = %LoginState::Expired, "Session expired");
        }
    }
}

/// An authenticated portal session: the cookie store plus the CSRF token derived from it.
///
/// Immutable once built. Clones share the cookie store and the expiry flag, so a 401 seen
/// through one clone expires all of them.
#[derive(Clone)]
pub struct SessionContext {
    cookie_store: Arc<dyn CookieStore>,
    xsrf_token: XsrfToken,
    expiry: Arc<SessionExpiry>,
}

impl SessionContext {
    pub(crate) fn new(cookie_store: Arc<dyn CookieStore>, xsrf_token: XsrfToken) -> Self {
        Self {
            cookie_store,
            xsrf_token,
            expiry: Arc::new(SessionExpiry::new()),
        }
    }

    /// Resumes a session from a store that already holds the portal's authenticated cookies.
    ///
    /// Only the token capture step runs; the store is neither cleared nor sent anywhere.
    pub fn resume(
        cookie_store: Arc<dyn CookieStore>,
        settings: &ClientSettings,
    ) -> Result<Self, LoginError> {
        let portal_url = Url::parse(&settings.portal_url)?;
        let xsrf_token = capture_xsrf_token(cookie_store.as_ref(), &portal_url)?;

        tracing::debug!(state = %LoginState::Authenticated, "Resumed session");
        Ok(Self::new(cookie_store, xsrf_token))
    }

    /// The store holding the session cookies.
    pub fn cookie_store(&self) -> &Arc<dyn CookieStore> {
        &self.cookie_store
    }

    /// The CSRF token sent as `X-XSRF-TOKEN` on every request.
    pub fn xsrf_token(&self) -> &XsrfToken {
        &self.xsrf_token
    }

    /// Returns true once any request of this session received a 401.
    pub fn is_expired(&self) -> bool {
        self.expiry.is_expired()
    }

    /// [`LoginState::Authenticated`] until the first 401, then [`LoginState::Expired`].
    pub fn state(&self) -> LoginState {
        if self.is_expired() {
            LoginState::Expired
        } else {
            LoginState::Authenticated
        }
    }

    pub(crate) fn expiry(&self) -> Arc<SessionExpiry> {
        self.expiry.clone()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("xsrf_token", &self.xsrf_token)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

/// Step 4 of the handshake: reads the CSRF token the portal issued.
pub(crate) fn capture_xsrf_token(
    cookie_store: &dyn CookieStore,
    portal_url: &Url,
) -> Result<XsrfToken, LoginError> {
    XsrfToken::from_cookie_store(cookie_store, portal_url)?.ok_or_else(|| {
        LoginError::MissingXsrfToken {
            portal_url: portal_url.to_string(),
        }
    })
}
