use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use vmw_api_portal::models::{
    DlgDetailsResponse, DlgHeaderResponse, DownloadFile, DownloadGroupRequest, DownloadRequest,
    DownloadResponse,
};
use vmw_core::ApiError;

use crate::CatalogClient;

/// Locale download requests are issued in.
pub const DOWNLOAD_LOCALE: &str = "en_US";

/// Header and details of one download group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DownloadGroup {
    #[allow(missing_docs)]
    pub header: DlgHeaderResponse,
    #[allow(missing_docs)]
    pub details: DlgDetailsResponse,
}

impl DownloadGroup {
    /// The first file whose name matches `pattern`.
    pub fn find_file(&self, pattern: &Regex) -> Option<&DownloadFile> {
        self.details
            .download_files
            .iter()
            .find(|file| pattern.is_match(&file.file_name))
    }

    /// Whether the account holds the entitlement for this group.
    pub fn is_eligible(&self) -> bool {
        self.details.eligibility_response.eligible_to_download
    }

    /// Download request for `file`, as the portal's download page issues it.
    pub fn download_request(&self, file: &DownloadFile) -> DownloadRequest {
        DownloadRequest {
            locale: DOWNLOAD_LOCALE.to_string(),
            download_group: self.header.dlg.code.clone(),
            product_id: self.header.product.id,
            md5checksum: file.md5checksum.clone(),
            tag_id: self.header.dlg.tag_id,
            uuid: file.uuid.clone(),
            // The header escapes ampersands, the download endpoint wants them raw
            dlg_type: self.header.dlg.dlg_type.replace("&amp;", "&"),
            product_family: self.header.product.name.clone(),
            release_date: file.release_date.clone(),
            dlg_version: file.version.clone(),
            is_beta_flow: false,
        }
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum RequestDownloadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Invalid file pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("No file in download group {download_group} matches `{pattern}`")]
    NoMatchingFile {
        download_group: String,
        pattern: String,
    },
    #[error("Not permitted to download {file_name}, check account entitlement")]
    NotEligible { file_name: String },
}

impl CatalogClient {
    /// Fetches the header and the details of a download group.
    pub async fn download_group(
        &self,
        request: &DownloadGroupRequest,
    ) -> Result<DownloadGroup, ApiError> {
        let header = self.get_dlg_header(request).await?;
        let details = self.get_dlg_details(request).await?;

        Ok(DownloadGroup { header, details })
    }

    /// Issues a download URL for the first file of the group matching `file_pattern`.
    ///
    /// Fails without requesting a download when no file matches or when the account is not
    /// entitled to the group.
    pub async fn request_download(
        &self,
        request: &DownloadGroupRequest,
        file_pattern: &str,
    ) -> Result<DownloadResponse, RequestDownloadError> {
        let pattern = Regex::new(file_pattern)?;
        let group = self.download_group(request).await?;

        let file = group
            .find_file(&pattern)
            .ok_or_else(|| RequestDownloadError::NoMatchingFile {
                download_group: request.download_group.clone(),
                pattern: file_pattern.to_string(),
            })?;

        if !group.is_eligible() {
            return Err(RequestDownloadError::NotEligible {
                file_name: file.file_name.clone(),
            });
        }

        tracing::info!(file = %file.file_name, "Requesting download");
        Ok(self.get_download(&group.download_request(file)).await?)
    }
}
