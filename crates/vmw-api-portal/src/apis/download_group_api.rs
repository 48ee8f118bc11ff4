use super::{configuration::Configuration, parse_json, Error};
use crate::models;

const DLG_HEADER: &str = "channel/public/api/v1.0/products/getDLGHeader";
const DLG_DETAILS: &str = "channel/api/v1.0/dlg/details";
const EULA_ACCEPT: &str = "channel/api/v1.0/dlg/eula/accept";
const DOWNLOAD: &str = "channel/api/v1.0/dlg/download";

pub async fn get_dlg_header(
    configuration: &Configuration,
    request: &models::DownloadGroupRequest,
) -> Result<models::DlgHeaderResponse, Error> {
    let response = configuration
        .client
        .get(configuration.url(DLG_HEADER))
        .query(request)
        .send()
        .await?;

    parse_json(response).await
}

/// File listing and download eligibility of a download group. Requires an authenticated session.
pub async fn get_dlg_details(
    configuration: &Configuration,
    request: &models::DownloadGroupRequest,
) -> Result<models::DlgDetailsResponse, Error> {
    let response = configuration
        .client
        .get(configuration.url(DLG_DETAILS))
        .query(request)
        .send()
        .await?;

    parse_json(response).await
}

pub async fn eula_accept(
    configuration: &Configuration,
    request: &models::DownloadGroupRequest,
) -> Result<serde_json::Value, Error> {
    let response = configuration
        .client
        .get(configuration.url(EULA_ACCEPT))
        .query(request)
        .send()
        .await?;

    parse_json(response).await
}

/// Issues a download, returning the signed location of the requested file.
pub async fn download(
    configuration: &Configuration,
    request: &models::DownloadRequest,
) -> Result<models::DownloadResponse, Error> {
    let response = configuration
        .client
        .post(configuration.url(DOWNLOAD))
        .json(request)
        .send()
        .await?;

    parse_json(response).await
}
