use reqwest::redirect::{Attempt, Policy};
use thiserror::Error;

/// Marker the portal adds to a redirect target when it rejects the submitted credentials.
pub const AUTH_ERROR_MARKER: &str = "errorCode=AUTH-ERR";

const MAX_REDIRECTS: usize = 10;

/// A redirect to the portal's authentication error page was intercepted.
#[derive(Debug, Clone, Error)]
#[error("redirect to authentication error page: {location}")]
pub struct AuthRejectedRedirect {
    /// The intercepted redirect target.
    pub location: String,
}

/// Redirect policy that follows redirects but aborts on the authentication error page.
///
/// Without it the SSO exchange would land on the error page and continue with an anonymous
/// session.
pub fn auth_error_redirect_policy() -> Policy {
    Policy::custom(inspect_redirect)
}

fn inspect_redirect(attempt: Attempt) -> reqwest::redirect::Action {
    if attempt.url().as_str().contains(AUTH_ERROR_MARKER) {
        let location = attempt.url().to_string();
        tracing::warn!(%location, "Portal redirected to the authentication error page");
        return attempt.error(AuthRejectedRedirect { location });
    }

    if attempt.previous().len() >= MAX_REDIRECTS {
        return attempt.error("too many redirects");
    }

    attempt.follow()
}

/// Finds an [`AuthRejectedRedirect`] in the source chain of a transport error.
pub fn find_auth_rejection(error: &reqwest::Error) -> Option<&AuthRejectedRedirect> {
    if !error.is_redirect() {
        return None;
    }

    let mut source = std::error::Error::source(error);
    while let Some(err) = source {
        if let Some(rejection) = err.downcast_ref::<AuthRejectedRedirect>() {
            return Some(rejection);
        }
        source = err.source();
    }
    None
}
