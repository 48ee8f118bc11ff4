use serde::{Deserialize, Serialize};

/// Response of the A-Z product catalog listing.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsAtoZResponse {
    #[serde(default)]
    pub product_category_list: Vec<ProductCategory>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub product_list: Vec<ProductSummary>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub name: String,
    #[serde(default)]
    pub actions: Vec<ProductAction>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A link attached to a catalog entry, e.g. "View Download Components".
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductAction {
    pub linkname: String,
    pub target: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Query of the product header lookup.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductHeaderRequest {
    pub category: String,
    pub product: String,
    pub version: String,
}

/// Query of the related download group listing.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedDlgListRequest {
    pub category: String,
    pub product: String,
    pub version: String,
    /// One of `PRODUCT_BINARY`, `DRIVERS_TOOLS`, `OPEN_SOURCE`, `CUSTOM_ISO`, `ADDONS`.
    pub dlg_type: String,
}
