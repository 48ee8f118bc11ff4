use std::sync::Arc;

use reqwest_middleware::{Middleware, Next};
use vmw_api_base::ClassifiedStatus;

use crate::auth::SessionExpiry;

/// Logs every outgoing request as `[METHOD] origin/path`.
///
/// Query strings are left out, they carry download group and product identifiers but never
/// need to be in the logs.
pub struct RequestLoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for RequestLoggingMiddleware {
    async fn handle(
        &self,
        req: reqwest::Request,
        extensions: &mut http::Extensions,
        next: Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        let url = req.url();
        tracing::debug!(
            method = %req.method(),
            "[{}] {}{}",
            req.method(),
            url.origin().ascii_serialization(),
            url.path()
        );

        next.run(req, extensions).await
    }
}

/// Converts the portal's session and request failures into [`ClassifiedStatus`] errors before
/// the response reaches an endpoint binding.
///
/// | status | error |
/// |---|---|
/// | 401 | [`ClassifiedStatus::SessionExpired`] |
/// | 403 | [`ClassifiedStatus::Forbidden`] |
/// | 400 | [`ClassifiedStatus::BadRequest`] |
///
/// Any other response passes through untouched. Nothing is retried.
///
/// When bound to a session, the first 401 marks the session expired and every later request
/// through that session fails with [`ClassifiedStatus::SessionExpired`] without being sent.
pub struct ResponseClassificationMiddleware {
    expiry: Option<Arc<SessionExpiry>>,
}

impl ResponseClassificationMiddleware {
    /// Classifies responses without tracking a session, as used during the login handshake.
    pub fn new() -> Self {
        Self { expiry: None }
    }

    /// Classifies responses and poisons `expiry` on the first 401.
    pub fn for_session(expiry: Arc<SessionExpiry>) -> Self {
        Self {
            expiry: Some(expiry),
        }
    }
}

impl Default for ResponseClassificationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Middleware for ResponseClassificationMiddleware {
    async fn handle(
        &self,
        req: reqwest::Request,
        extensions: &mut http::Extensions,
        next: Next<'_>,
    ) -> Result<reqwest::Response, reqwest_middleware::Error> {
        if self.expiry.as_ref().is_some_and(|e| e.is_expired()) {
            tracing::debug!(url = %req.url(), "Refusing request on an expired session");
            return Err(reqwest_middleware::Error::middleware(
                ClassifiedStatus::SessionExpired,
            ));
        }

        let response = next.run(req, extensions).await?;

        let Some(classified) = ClassifiedStatus::from_status(response.status()) else {
            return Ok(response);
        };

        if classified == ClassifiedStatus::SessionExpired {
            if let Some(expiry) = &self.expiry {
                expiry.mark_expired();
            }
        }

        tracing::warn!(
            status = %response.status(),
            url = %response.url(),
            "{classified}"
        );

        Err(reqwest_middleware::Error::middleware(classified))
    }
}
