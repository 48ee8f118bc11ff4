//! Session establishment.
//!
//! [`LoginClient`] turns [`Credentials`] into a [`SessionContext`] through the portal's four step
//! handshake:
//!
//! 1. GET the landing page to collect the session-tracking cookies
//! 2. POST the credentials to the identity provider and extract the SAML assertion
//! 3. POST the assertion to the portal's SSO endpoint, aborting on the authentication error page
//! 4. Capture the `XSRF-TOKEN` cookie, echoed as `X-XSRF-TOKEN` on every later request

mod credentials;
mod login;
mod login_error;
mod saml;
mod session;
mod state;
mod xsrf;

pub use credentials::Credentials;
pub use login::LoginClient;
pub use login_error::{AuthErrorCode, LoginError};
pub use saml::{extract_saml_response, SamlResponse};
pub(crate) use session::capture_xsrf_token;
pub use session::{SessionContext, SessionExpiry};
pub use state::{LoginState, LoginStep};
pub use xsrf::{XsrfToken, XSRF_COOKIE, XSRF_HEADER};
