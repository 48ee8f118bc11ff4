mod account_info;
pub use account_info::AccountInfoRequest;
mod download;
pub use download::{DownloadRequest, DownloadResponse};
mod download_group;
pub use download_group::{
    DlgDetailsResponse, DlgHeaderResponse, DlgHeaderInfo, DlgProductInfo, DownloadFile,
    DownloadGroupRequest, EligibilityResponse,
};
mod products;
pub use products::{
    ProductAction, ProductCategory, ProductHeaderRequest, ProductSummary, ProductsAtoZResponse,
    RelatedDlgListRequest,
};
