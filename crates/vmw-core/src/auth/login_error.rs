use std::fmt;

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

use super::LoginStep;
use crate::{http::CookieError, ApiError};

/// Handshake failure codes the portal tooling reports to users.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthErrorCode {
    /// The identity provider's response carried no SAML assertion.
    Parse,
    /// The portal redirected to its authentication error page.
    Rejected,
    /// The handshake completed without an `XSRF-TOKEN` cookie.
    MissingToken,
}

impl fmt::Display for AuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthErrorCode::Parse => "AUTH_PARSE",
            AuthErrorCode::Rejected => "AUTH_REJECTED",
            AuthErrorCode::MissingToken => "MISSING_TOKEN",
        };
        write!(f, "{}", s)
    }
}

/// Errors from the login handshake.
///
/// Every variant leaves the handshake in the failed state. Nothing is retried, a new login
/// starts again from the landing page.
#[derive(Debug, Error)]
pub enum LoginError {
    /// Credentials were most likely rejected by the identity provider.
    #[error("[AUTH_PARSE] SAMLResponse not found in the identity provider response")]
    SamlResponseNotFound,
    /// The portal redirected to its authentication error page.
    #[error("[AUTH_REJECTED] Authentication rejected by the portal: redirected to {location}")]
    Rejected {
        /// The intercepted redirect target.
        location: String,
    },
    /// The handshake completed but the portal issued no CSRF token.
    #[error("[MISSING_TOKEN] XSRF-TOKEN cookie not found for {portal_url}")]
    MissingXsrfToken {
        /// Portal the token was looked up for.
        portal_url: String,
    },
    /// The portal issued a CSRF token that cannot be sent back in a header.
    #[error("Invalid XSRF-TOKEN value: {0}")]
    InvalidXsrfToken(#[from] InvalidHeaderValue),
    /// A handshake request failed.
    #[error("Login failed at {step}: {source}")]
    Api {
        /// The step whose request failed.
        step: LoginStep,
        /// The classified or transport error.
        #[source]
        source: ApiError,
    },
    /// The cookie store failed.
    #[error(transparent)]
    Cookie(#[from] CookieError),
    /// The configured portal or identity URL is not a valid URL.
    #[error("Invalid portal URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl LoginError {
    /// The authentication failure code, for failures the portal attributes to the credentials
    /// or the handshake itself.
    pub fn code(&self) -> Option<AuthErrorCode> {
        match self {
            LoginError::SamlResponseNotFound => Some(AuthErrorCode::Parse),
            LoginError::Rejected { .. } => Some(AuthErrorCode::Rejected),
            LoginError::MissingXsrfToken { .. } => Some(AuthErrorCode::MissingToken),
            _ => None,
        }
    }
}
