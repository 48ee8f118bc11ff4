#![doc = include_str!("../README.md")]

mod catalog_client;
mod download;
mod product_index;

pub use catalog_client::{CatalogClient, CatalogClientExt};
pub use download::{DownloadGroup, RequestDownloadError, DOWNLOAD_LOCALE};
pub use product_index::{ProductIndexEntry, PRODUCT_BINARY, VIEW_DOWNLOAD_COMPONENTS};
pub use vmw_api_portal::models;
