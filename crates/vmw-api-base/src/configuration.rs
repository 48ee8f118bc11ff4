//! Configuration types for API clients.

/// Configuration for an API client.
///
/// Every request built from a configuration is scoped to [`Configuration::base_path`]. Session
/// state (cookies and the CSRF header) lives inside [`Configuration::client`].
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the portal (e.g., "<https://customerconnect.vmware.com>").
    pub base_path: String,
    /// HTTP client with middleware support.
    pub client: reqwest_middleware::ClientWithMiddleware,
}

impl Configuration {
    /// Joins a relative endpoint path onto the base path.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_path.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_path: &str) -> Configuration {
        Configuration {
            base_path: base_path.to_string(),
            client: reqwest::Client::new().into(),
        }
    }

    #[test]
    fn test_url_joins_with_single_slash() {
        assert_eq!(
            config("https://customerconnect.vmware.com/").url("/channel/api/v1.0/dlg/details"),
            "https://customerconnect.vmware.com/channel/api/v1.0/dlg/details"
        );
        assert_eq!(
            config("http://127.0.0.1:8080").url("channel/api"),
            "http://127.0.0.1:8080/channel/api"
        );
    }
}
