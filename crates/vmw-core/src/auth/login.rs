use std::sync::Arc;

use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;

use super::{
    capture_xsrf_token, extract_saml_response, Credentials, LoginError, LoginState, LoginStep,
    SessionContext,
};
use crate::{
    http::{
        find_auth_rejection, new_http_client_builder, with_middleware, CookieStore,
        InMemoryCookieStore, ResponseClassificationMiddleware,
    },
    ApiError, ClientSettings,
};

const LANDING_PATH: &str = "web/vmware/login";
const CREDENTIAL_SUBMIT_PATH: &str = "oam/server/auth_cred_submit";
const SSO_PATH: &str = "vmwauth/saml/SSO";
/// Application identifier the identity provider expects for the portal.
const AUTH_APP_ID: &str = "WMVMWR";

/// Client running the portal's browser-style login handshake.
///
/// # Lifecycle
///
/// 1. Create a `LoginClient`, optionally around a caller-owned cookie store
/// 2. Call [`LoginClient::login`]
/// 3. Build an authenticated [`Client`](crate::Client) from the returned [`SessionContext`]
///
/// ```rust,no_run
/// # use vmw_core::{auth::{Credentials, LoginClient}, Client, ClientSettings};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ClientSettings::default();
/// let mut login_client = LoginClient::new(settings.clone())?;
///
/// let session = login_client
///     .login(&Credentials::new("user@example.com", "password"))
///     .await?;
///
/// let client = Client::new(settings, session);
/// # Ok(())
/// # }
/// ```
///
/// The cookie store belongs to one handshake at a time, which `login` taking `&mut self`
/// enforces. Concurrent logins need separate clients, each with its own store.
pub struct LoginClient {
    portal_url: Url,
    identity_url: Url,
    cookie_store: Arc<dyn CookieStore>,
    http: ClientWithMiddleware,
    state: LoginState,
}

impl LoginClient {
    /// Creates a login client with a fresh in-memory cookie store.
    pub fn new(settings: ClientSettings) -> Result<Self, LoginError> {
        Self::with_cookie_store(settings, Arc::new(InMemoryCookieStore::new()))
    }

    /// Creates a login client around a caller-owned cookie store.
    ///
    /// The store is cleared when [`LoginClient::login`] starts.
    pub fn with_cookie_store(
        settings: ClientSettings,
        cookie_store: Arc<dyn CookieStore>,
    ) -> Result<Self, LoginError> {
        let portal_url = Url::parse(&settings.portal_url)?;
        let identity_url = Url::parse(&settings.identity_url)?;

        let http = new_http_client_builder(&settings, cookie_store.clone())
            .build()
            .expect("Login HTTP client build should not fail");

        Ok(Self {
            portal_url,
            identity_url,
            cookie_store,
            http: with_middleware(http, ResponseClassificationMiddleware::new()),
            state: LoginState::Anonymous,
        })
    }

    /// Where the last handshake got to.
    pub fn state(&self) -> LoginState {
        self.state
    }

    /// Runs the four handshake steps in order and returns the authenticated session.
    ///
    /// A failed step stops the handshake and leaves the client in [`LoginState::Failed`].
    /// Calling `login` again restarts from step 1, which clears the store and so also ends any
    /// session previously obtained from this client.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<SessionContext, LoginError> {
        tracing::info!(portal = %self.portal_url, "Logging in");

        match self.handshake(credentials).await {
            Ok(session) => {
                tracing::info!("Login successful");
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                self.transition(LoginState::Failed);
                Err(e)
            }
        }
    }

    async fn handshake(&mut self, credentials: &Credentials) -> Result<SessionContext, LoginError> {
        self.state = LoginState::Anonymous;

        self.bootstrap().await?;
        self.transition(LoginStep::Bootstrap.target_state());

        let saml_response = {
            let body = self.submit_credentials(credentials).await?;
            extract_saml_response(&body).ok_or(LoginError::SamlResponseNotFound)?
        };
        self.transition(LoginStep::CredentialSubmission.target_state());

        self.send(
            LoginStep::SsoExchange,
            self.http
                .post(endpoint(&self.portal_url, SSO_PATH)?)
                .form(&[("SAMLResponse", saml_response.as_str())]),
        )
        .await?;
        self.transition(LoginStep::SsoExchange.target_state());

        let xsrf_token = capture_xsrf_token(self.cookie_store.as_ref(), &self.portal_url)?;
        self.transition(LoginStep::TokenCapture.target_state());

        Ok(SessionContext::new(self.cookie_store.clone(), xsrf_token))
    }

    /// Step 1: starts from an empty store and collects the landing page cookies.
    async fn bootstrap(&self) -> Result<(), LoginError> {
        self.cookie_store.clear()?;

        self.send(
            LoginStep::Bootstrap,
            self.http.get(endpoint(&self.portal_url, LANDING_PATH)?),
        )
        .await?;

        Ok(())
    }

    /// Step 2: returns the identity provider's response page.
    async fn submit_credentials(&self, credentials: &Credentials) -> Result<String, LoginError> {
        let response = self
            .send(
                LoginStep::CredentialSubmission,
                self.http
                    .post(endpoint(&self.identity_url, CREDENTIAL_SUBMIT_PATH)?)
                    .query(&[("Auth-AppID", AUTH_APP_ID)])
                    .form(&[
                        ("username", credentials.username.as_str()),
                        ("password", credentials.password.as_str()),
                    ]),
            )
            .await?;

        response.text().await.map_err(|e| LoginError::Api {
            step: LoginStep::CredentialSubmission,
            source: ApiError::Reqwest(e),
        })
    }

    /// Sends one handshake request, following redirects unless they land on the error page.
    async fn send(
        &self,
        step: LoginStep,
        request: reqwest_middleware::RequestBuilder,
    ) -> Result<reqwest::Response, LoginError> {
        let response = request.send().await.map_err(|e| step_error(step, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LoginError::Api {
                step,
                source: ApiError::ResponseContent { status, message },
            });
        }

        Ok(response)
    }

    fn transition(&mut self, next: LoginState) {
        tracing::debug!(from = %self.state, to = %next, "Login state transition");
        self.state = next;
    }
}

fn step_error(step: LoginStep, error: reqwest_middleware::Error) -> LoginError {
    if let reqwest_middleware::Error::Reqwest(e) = &error {
        if let Some(rejection) = find_auth_rejection(e) {
            return LoginError::Rejected {
                location: rejection.location.clone(),
            };
        }
    }

    LoginError::Api {
        step,
        source: error.into(),
    }
}

fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}/{}", base.as_str().trim_end_matches('/'), path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let base = Url::parse("https://customerconnect.vmware.com").unwrap();
        assert_eq!(
            endpoint(&base, LANDING_PATH).unwrap().as_str(),
            "https://customerconnect.vmware.com/web/vmware/login"
        );

        let base = Url::parse("http://127.0.0.1:8080/prefix/").unwrap();
        assert_eq!(
            endpoint(&base, SSO_PATH).unwrap().as_str(),
            "http://127.0.0.1:8080/prefix/vmwauth/saml/SSO"
        );
    }

    #[test]
    fn test_new_login_client_is_anonymous() {
        let client = LoginClient::new(ClientSettings::default()).unwrap();

        assert_eq!(client.state(), LoginState::Anonymous);
    }

    #[test]
    fn test_invalid_portal_url() {
        let settings = ClientSettings {
            portal_url: "not a url".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            LoginClient::new(settings),
            Err(LoginError::InvalidUrl(_))
        ));
    }
}
