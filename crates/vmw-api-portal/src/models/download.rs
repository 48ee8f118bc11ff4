use serde::{Deserialize, Serialize};

/// Body of a download issuance.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub locale: String,
    pub download_group: String,
    pub product_id: i64,
    pub md5checksum: String,
    pub tag_id: i64,
    #[serde(rename = "uUId")]
    pub uuid: String,
    pub dlg_type: String,
    pub product_family: String,
    pub release_date: String,
    pub dlg_version: String,
    pub is_beta_flow: bool,
}

/// Response of a download issuance, carrying the signed download location.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadResponse {
    #[serde(
        rename = "downloadURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub download_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
