use serde::{Deserialize, Serialize};

/// Query shared by the download group header, details and EULA endpoints.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadGroupRequest {
    pub download_group: String,
    pub product_id: i64,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct DlgHeaderResponse {
    pub dlg: DlgHeaderInfo,
    pub product: DlgProductInfo,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlgHeaderInfo {
    pub code: String,
    #[serde(default)]
    pub tag_id: i64,
    /// Download group type, HTML-escaped by the portal (`&amp;`).
    #[serde(rename = "type")]
    pub dlg_type: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct DlgProductInfo {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DlgDetailsResponse {
    #[serde(default)]
    pub download_files: Vec<DownloadFile>,
    #[serde(default)]
    pub eligibility_response: EligibilityResponse,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFile {
    pub file_name: String,
    #[serde(default)]
    pub md5checksum: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub version: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityResponse {
    #[serde(default)]
    pub eligible_to_download: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
