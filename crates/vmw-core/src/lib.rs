#![doc = include_str!("../README.md")]

pub mod auth;
pub mod client;
mod error;
pub mod http;

pub use error::{ApiError, BadRequestError, ForbiddenError, SessionExpiredError};

pub use client::{Client, ClientSettings};
