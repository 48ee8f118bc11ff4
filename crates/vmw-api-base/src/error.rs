//! Error types for API operations.

use reqwest::StatusCode;

/// Statuses the portal uses to signal session and request problems.
///
/// These are raised by the response classification middleware before a response reaches the
/// endpoint bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ClassifiedStatus {
    /// 401, the session cookies are no longer accepted.
    #[error("Session timed out - please reauthenticate")]
    SessionExpired,
    /// 403, the account may not access the resource or is being throttled.
    #[error("Access denied - try again later")]
    Forbidden,
    /// 400, the portal rejected the request parameters.
    #[error("Bad request - the portal rejected the request parameters")]
    BadRequest,
}

impl ClassifiedStatus {
    /// Classifies a status code, returning `None` for statuses that pass through.
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status {
            StatusCode::UNAUTHORIZED => Some(Self::SessionExpired),
            StatusCode::FORBIDDEN => Some(Self::Forbidden),
            StatusCode::BAD_REQUEST => Some(Self::BadRequest),
            _ => None,
        }
    }

    /// The status code this classification was derived from.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SessionExpired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

/// An error returned by the API client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The response was classified by the transport as a session or request problem.
    #[error(transparent)]
    Status(#[from] ClassifiedStatus),

    /// Server returned an unclassified error response.
    #[error("API error {status}: {content}")]
    Response {
        /// HTTP status code of the response.
        status: StatusCode,
        /// Raw response body content.
        content: String,
    },

    /// Could not reach the server (DNS failure, timeout, TLS error, connection refused, etc.)
    #[error("not connected: {0}")]
    NotConnected(String),

    /// The response body could not be decoded.
    #[error("unexpected response content: {0}")]
    Decode(String),

    /// Catch-all for other errors (redirect policy, serialization, IO, etc.)
    #[error("other error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            return Error::Response {
                status,
                // Can't get the response body from a reqwest::Error, so just leave it empty.
                content: String::new(),
            };
        }

        // Consider connection errors, timeouts, and errors sending requests as "not connected",
        // since they all indicate a failure to communicate with the server.
        if e.is_connect() || e.is_timeout() || e.is_request() {
            return Error::NotConnected(e.to_string());
        }

        if e.is_decode() {
            return Error::Decode(e.to_string());
        }

        Error::Other(e.to_string())
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => match e.downcast::<ClassifiedStatus>() {
                Ok(status) => Error::Status(status),
                Err(e) => Error::Other(e.to_string()),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_statuses() {
        assert_eq!(
            ClassifiedStatus::from_status(StatusCode::UNAUTHORIZED),
            Some(ClassifiedStatus::SessionExpired)
        );
        assert_eq!(
            ClassifiedStatus::from_status(StatusCode::FORBIDDEN),
            Some(ClassifiedStatus::Forbidden)
        );
        assert_eq!(
            ClassifiedStatus::from_status(StatusCode::BAD_REQUEST),
            Some(ClassifiedStatus::BadRequest)
        );
        assert_eq!(ClassifiedStatus::from_status(StatusCode::OK), None);
        assert_eq!(
            ClassifiedStatus::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            None
        );
        assert_eq!(ClassifiedStatus::from_status(StatusCode::FOUND), None);
    }

    #[test]
    fn test_middleware_error_recovers_classification() {
        let err: Error =
            reqwest_middleware::Error::middleware(ClassifiedStatus::Forbidden).into();
        assert!(matches!(err, Error::Status(ClassifiedStatus::Forbidden)));
    }

    #[test]
    fn test_middleware_error_falls_back_to_other() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: Error = reqwest_middleware::Error::middleware(io).into();
        assert!(matches!(err, Error::Other(msg) if msg == "boom"));
    }
}
