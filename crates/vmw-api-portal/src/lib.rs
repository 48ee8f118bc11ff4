//! Bindings for the JSON endpoints of the Customer Connect portal.
//!
//! Every function takes a [`Configuration`](apis::configuration::Configuration) whose client
//! already carries the session cookies and the `X-XSRF-TOKEN` header. The bindings attach
//! parameters and decode responses, nothing more.

pub mod apis;
#[allow(missing_docs)]
pub mod models;
