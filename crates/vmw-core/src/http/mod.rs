//! HTTP plumbing: cookie handling, redirect inspection and response classification.

/// Cookie data model and matching rules.
pub mod cookie;
/// Cookie error types.
pub mod cookie_error;
mod cookie_provider;
mod cookie_store;
mod http_client;
mod in_memory_cookie_store;
mod middleware;
mod redirect;

pub use cookie::{Cookie, SameSite};
pub use cookie_error::CookieError;
pub use cookie_provider::CookieProvider;
pub use cookie_store::CookieStore;
pub(crate) use http_client::{new_http_client_builder, with_middleware};
pub use in_memory_cookie_store::InMemoryCookieStore;
pub use middleware::{RequestLoggingMiddleware, ResponseClassificationMiddleware};
pub use redirect::{
    auth_error_redirect_policy, find_auth_rejection, AuthRejectedRedirect, AUTH_ERROR_MARKER,
};
