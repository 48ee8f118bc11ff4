//! Test helpers shared by the vmw-sdk crates.

mod api;
pub mod portal;

pub use api::start_api_mock;
