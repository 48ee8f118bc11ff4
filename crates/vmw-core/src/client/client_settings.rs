use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These settings specify the targets and transport behavior of
/// the portal client. They are optional and uneditable once the client is initialized.
///
/// Defaults to
///
/// ```
/// # use vmw_core::ClientSettings;
/// let settings = ClientSettings {
///     portal_url: "https://customerconnect.vmware.com".to_string(),
///     identity_url: "https://auth.vmware.com".to_string(),
///     user_agent: format!("vmw-sdk/{}", env!("CARGO_PKG_VERSION")),
///     timeout_secs: None,
///     accept_invalid_certs: false,
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The Customer Connect portal. Defaults to `https://customerconnect.vmware.com`
    pub portal_url: String,
    /// The identity provider credentials are submitted to. Defaults to `https://auth.vmware.com`
    pub identity_url: String,
    /// The user agent sent with every request. Defaults to `vmw-sdk/<version>`
    pub user_agent: String,
    /// Timeout applied to every request, in seconds. No timeout by default.
    pub timeout_secs: Option<u64>,
    /// Skip TLS certificate validation. Only meant for test proxies.
    pub accept_invalid_certs: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            portal_url: "https://customerconnect.vmware.com".into(),
            identity_url: "https://auth.vmware.com".into(),
            user_agent: format!("vmw-sdk/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
            accept_invalid_certs: false,
        }
    }
}
