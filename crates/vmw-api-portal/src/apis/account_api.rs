use super::{configuration::Configuration, parse_json, Error};
use crate::models;

const ACCOUNT_INFO: &str = "channel/api/v1.0/ems/accountinfo";

/// Returns the account profile and its first entitlement rows.
pub async fn account_info(
    configuration: &Configuration,
    request: &models::AccountInfoRequest,
) -> Result<serde_json::Value, Error> {
    let response = configuration
        .client
        .post(configuration.url(ACCOUNT_INFO))
        .header(reqwest::header::ACCEPT, "application/json, text/plain, */*")
        .json(request)
        .send()
        .await?;

    parse_json(response).await
}
