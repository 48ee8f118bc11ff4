use serde::{Deserialize, Serialize};

/// Body of the account information lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfoRequest {
    /// Number of entitlement rows to return. The portal expects a string.
    pub row_limit: String,
}

impl Default for AccountInfoRequest {
    fn default() -> Self {
        Self {
            row_limit: "3".to_string(),
        }
    }
}
