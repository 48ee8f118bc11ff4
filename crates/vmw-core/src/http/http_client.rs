use std::{sync::Arc, time::Duration};

use reqwest::header::{self, HeaderMap, HeaderValue};

use super::{
    auth_error_redirect_policy, CookieProvider, CookieStore, RequestLoggingMiddleware,
    ResponseClassificationMiddleware,
};
use crate::ClientSettings;

/// Base builder shared by the login and session clients.
///
/// Cookies come from `cookie_store`, redirects are inspected for the authentication error page
/// and certificates are validated unless the settings opt out.
pub(crate) fn new_http_client_builder(
    settings: &ClientSettings,
    cookie_store: Arc<dyn CookieStore>,
) -> reqwest::ClientBuilder {
    let mut client_builder = reqwest::Client::builder()
        .cookie_provider(Arc::new(CookieProvider::new(cookie_store)))
        .redirect(auth_error_redirect_policy())
        .default_headers(build_default_headers(settings));

    if let Some(timeout) = settings.timeout_secs {
        client_builder = client_builder.timeout(Duration::from_secs(timeout));
    }

    if settings.accept_invalid_certs {
        tracing::warn!("TLS certificate validation is disabled");
        client_builder = client_builder.danger_accept_invalid_certs(true);
    }

    client_builder
}

/// Wraps a transport client with request logging and response classification.
pub(crate) fn with_middleware(
    client: reqwest::Client,
    classification: ResponseClassificationMiddleware,
) -> reqwest_middleware::ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(RequestLoggingMiddleware)
        .with(classification)
        .build()
}

/// Build default headers for the portal HTTP client
fn build_default_headers(settings: &ClientSettings) -> HeaderMap {
    let mut headers = HeaderMap::new();

    match HeaderValue::from_str(&settings.user_agent) {
        Ok(user_agent) => {
            headers.append(header::USER_AGENT, user_agent);
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid user agent: {e}");
        }
    }

    headers
}
