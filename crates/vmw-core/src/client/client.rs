use std::sync::Arc;

use reqwest::header::{self, HeaderMap, HeaderValue};
use vmw_api_base::Configuration;

use super::internal::InternalClient;
use crate::{
    auth::{Credentials, LoginClient, LoginError, SessionContext, XSRF_HEADER},
    http::{new_http_client_builder, with_middleware, ResponseClassificationMiddleware},
    ClientSettings,
};

/// The main struct to interact with the portal.
///
/// Built by injecting an authenticated [`SessionContext`]; the session is never modified
/// afterwards. Every request is scoped to the portal URL, carries the session cookies and the
/// `X-XSRF-TOKEN` header, and goes through the response classification.
#[derive(Debug, Clone)]
pub struct Client {
    // Clones must share the same instance, so all state lives behind the Arc
    #[doc(hidden)]
    pub internal: Arc<InternalClient>,
}

impl Client {
    /// Create an authenticated client from an established session.
    pub fn new(settings: ClientSettings, session: SessionContext) -> Self {
        let http_client = new_http_client_builder(&settings, session.cookie_store().clone())
            .default_headers(build_session_headers(&session))
            .build()
            .expect("Portal HTTP client build should not fail");

        let api_configuration = Configuration {
            base_path: settings.portal_url.clone(),
            client: with_middleware(
                http_client,
                ResponseClassificationMiddleware::for_session(session.expiry()),
            ),
        };

        Self {
            internal: Arc::new(InternalClient {
                settings,
                session,
                api_configuration,
            }),
        }
    }

    /// Log in with a fresh cookie store and build a client from the resulting session.
    pub async fn login(
        settings: ClientSettings,
        credentials: &Credentials,
    ) -> Result<Self, LoginError> {
        let session = LoginClient::new(settings.clone())?
            .login(credentials)
            .await?;

        Ok(Self::new(settings, session))
    }

    /// The session this client was built from.
    pub fn session(&self) -> &SessionContext {
        self.internal.session()
    }
}

/// Headers every authenticated request carries
fn build_session_headers(session: &SessionContext) -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(XSRF_HEADER, session.xsrf_token().header_value().clone());
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static("application/json"),
    );

    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{auth::XsrfToken, http::InMemoryCookieStore};

    #[test]
    fn test_session_headers() {
        let session = SessionContext::new(
            Arc::new(InMemoryCookieStore::new()),
            XsrfToken::new("tok1").unwrap(),
        );

        let headers = build_session_headers(&session);

        assert_eq!(headers.get("X-XSRF-TOKEN").unwrap(), "tok1");
        assert_eq!(headers.get(header::ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_expired_session_refuses_configuration() {
        let session = SessionContext::new(
            Arc::new(InMemoryCookieStore::new()),
            XsrfToken::new("tok1").unwrap(),
        );
        let client = Client::new(ClientSettings::default(), session.clone());
        assert!(client.internal.get_api_configuration().is_ok());

        session.expiry().mark_expired();

        assert!(matches!(
            client.internal.get_api_configuration(),
            Err(crate::ApiError::SessionExpired(_))
        ));
    }
}
