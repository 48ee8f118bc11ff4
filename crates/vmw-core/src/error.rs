//! Errors that can occur when using this SDK

use reqwest::StatusCode;
use thiserror::Error;
use vmw_api_base::{ClassifiedStatus, Error as BaseApiError};

/// Errors from requests made through an authenticated session or the login handshake.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: the session is no longer valid and must be re-established with a new login.
    #[error(transparent)]
    SessionExpired(#[from] SessionExpiredError),
    /// 403: access denied or throttled. Retrying is left to the caller.
    #[error(transparent)]
    Forbidden(#[from] ForbiddenError),
    /// 400: the portal rejected the request parameters.
    #[error(transparent)]
    BadRequest(#[from] BadRequestError),

    /// Transport failure, surfaced unchanged.
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// Unclassified error status.
    #[error("Received error message from server: [{}] {}", .status, .message)]
    ResponseContent {
        /// Status code of the response.
        status: StatusCode,
        /// Response body.
        message: String,
    },

    /// The portal could not be reached.
    #[error("Could not reach the portal: {0}")]
    NotConnected(String),

    /// The response body was not what the endpoint returns.
    #[error("Unexpected response content: {0}")]
    Decode(String),

    /// Any other failure.
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// The status code the error was derived from, when there is one.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            ApiError::SessionExpired(_) => Some(StatusCode::UNAUTHORIZED),
            ApiError::Forbidden(_) => Some(StatusCode::FORBIDDEN),
            ApiError::BadRequest(_) => Some(StatusCode::BAD_REQUEST),
            ApiError::Reqwest(e) => e.status(),
            ApiError::ResponseContent { status, .. } => Some(*status),
            ApiError::NotConnected(_) | ApiError::Decode(_) | ApiError::Other(_) => None,
        }
    }
}

impl From<ClassifiedStatus> for ApiError {
    fn from(status: ClassifiedStatus) -> Self {
        match status {
            ClassifiedStatus::SessionExpired => SessionExpiredError.into(),
            ClassifiedStatus::Forbidden => ForbiddenError.into(),
            ClassifiedStatus::BadRequest => BadRequestError.into(),
        }
    }
}

impl From<reqwest_middleware::Error> for ApiError {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Self::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => match e.downcast::<ClassifiedStatus>() {
                Ok(status) => status.into(),
                Err(e) => Self::Other(e.to_string()),
            },
        }
    }
}

impl From<BaseApiError> for ApiError {
    fn from(e: BaseApiError) -> Self {
        match e {
            BaseApiError::Status(status) => status.into(),
            BaseApiError::Response { status, content } => Self::ResponseContent {
                status,
                message: content,
            },
            BaseApiError::NotConnected(e) => Self::NotConnected(e),
            BaseApiError::Decode(e) => Self::Decode(e),
            BaseApiError::Other(e) => Self::Other(e),
        }
    }
}

/// The portal answered 401. The session is expired and must not be reused.
#[derive(Debug, Error)]
#[error("Session timed out - please reauthenticate")]
pub struct SessionExpiredError;

/// The portal answered 403.
#[derive(Debug, Error)]
#[error("Access denied - try again later")]
pub struct ForbiddenError;

/// The portal answered 400.
#[derive(Debug, Error)]
#[error("Bad request - the portal rejected the request parameters")]
pub struct BadRequestError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_status_conversion() {
        let cases = [
            (ClassifiedStatus::SessionExpired, StatusCode::UNAUTHORIZED),
            (ClassifiedStatus::Forbidden, StatusCode::FORBIDDEN),
            (ClassifiedStatus::BadRequest, StatusCode::BAD_REQUEST),
        ];

        for (classified, status) in cases {
            let error = ApiError::from(classified);
            assert_eq!(error.status_code(), Some(status));
        }
    }

    #[test]
    fn test_middleware_error_recovers_classification() {
        let error = reqwest_middleware::Error::middleware(ClassifiedStatus::SessionExpired);

        assert!(matches!(
            ApiError::from(error),
            ApiError::SessionExpired(SessionExpiredError)
        ));
    }

    #[test]
    fn test_base_error_conversion() {
        let error = ApiError::from(BaseApiError::Status(ClassifiedStatus::Forbidden));
        assert!(matches!(error, ApiError::Forbidden(_)));

        let error = ApiError::from(BaseApiError::Response {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            content: "boom".to_string(),
        });
        assert_eq!(error.status_code(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert_eq!(
            error.to_string(),
            "Received error message from server: [500 Internal Server Error] boom"
        );
    }
}
