//! Base types and utilities for the Customer Connect API bindings.
//!
//! This crate provides common functionality shared by the endpoint bindings and the SDK core:
//! - Configuration for the HTTP client scoped to a portal base URL
//! - Error handling types, including the portal's status classification
//! - Response content type detection

mod configuration;
mod error;
mod util;

pub use configuration::Configuration;
pub use error::{ClassifiedStatus, Error};
pub use util::ContentType;
