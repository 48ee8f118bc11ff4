use super::{configuration::Configuration, parse_json, Error};
use crate::models;

const PRODUCTS_A_TO_Z: &str = "channel/public/api/v1.0/products/getProductsAtoZ";
const PRODUCT_HEADER: &str = "channel/public/api/v1.0/products/getProductHeader";
const RELATED_DLG_LIST: &str = "channel/public/api/v1.0/products/getRelatedDLGList";
const MY_LICENSED_PRODUCTS: &str = "channel/api/v1.0/products/getMyLicensedProducts";

/// Lists the full product catalog, including products that are not publicly listed.
pub async fn get_products_a_to_z(
    configuration: &Configuration,
) -> Result<models::ProductsAtoZResponse, Error> {
    let response = configuration
        .client
        .get(configuration.url(PRODUCTS_A_TO_Z))
        .query(&[("isPrivate", "true")])
        .send()
        .await?;

    parse_json(response).await
}

pub async fn get_product_header(
    configuration: &Configuration,
    request: &models::ProductHeaderRequest,
) -> Result<serde_json::Value, Error> {
    let response = configuration
        .client
        .get(configuration.url(PRODUCT_HEADER))
        .query(request)
        .send()
        .await?;

    parse_json(response).await
}

pub async fn get_related_dlg_list(
    configuration: &Configuration,
    request: &models::RelatedDlgListRequest,
) -> Result<serde_json::Value, Error> {
    let response = configuration
        .client
        .get(configuration.url(RELATED_DLG_LIST))
        .query(request)
        .send()
        .await?;

    parse_json(response).await
}

/// Lists the products the account holds entitlements for.
pub async fn get_my_licensed_products(
    configuration: &Configuration,
) -> Result<serde_json::Value, Error> {
    let response = configuration
        .client
        .post(configuration.url(MY_LICENSED_PRODUCTS))
        .send()
        .await?;

    parse_json(response).await
}
