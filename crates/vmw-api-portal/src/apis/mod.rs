// Reexport base types from vmw-api-base
pub use vmw_api_base::*;

pub mod account_api;
pub mod download_group_api;
pub mod products_api;

pub mod configuration {
    pub use vmw_api_base::Configuration;
}

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Decodes a JSON response, turning unclassified failures and non-JSON bodies into errors.
///
/// Statuses 400, 401 and 403 never reach this point; the classification middleware raises them
/// while the request is in flight.
pub(crate) async fn parse_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, Error> {
    let status = response.status();
    let content_type = ContentType::of(&response);
    let content = response.text().await?;

    if !status.is_success() {
        debug!(%status, "Portal returned an unclassified error status");
        return Err(Error::Response { status, content });
    }

    let result = match content_type {
        ContentType::Json => serde_json::from_str(&content).map_err(Error::from),
        // The portal answers with its login page when the session cookies are gone
        ContentType::Html => Err(Error::Decode(
            "received an HTML page where JSON was expected".to_string(),
        )),
        ContentType::Text => Err(Error::Decode(format!(
            "received text/plain where JSON was expected: {content}"
        ))),
        ContentType::Unsupported(other) => Err(Error::Decode(format!(
            "received `{other}` content where JSON was expected"
        ))),
    };

    if let Err(error) = &result {
        warn!(%error, "Failed to decode portal response");
    }
    result
}
