use std::sync::Arc;

use serde_json::json;
use vmw_catalog::{models::DownloadGroupRequest, CatalogClientExt, RequestDownloadError};
use vmw_core::{
    auth::SessionContext,
    http::{Cookie, CookieStore, InMemoryCookieStore},
    ApiError, Client, ClientSettings,
};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

async fn client(server: &MockServer) -> Client {
    let settings = ClientSettings {
        portal_url: server.uri(),
        identity_url: server.uri(),
        ..Default::default()
    };

    let store = Arc::new(InMemoryCookieStore::new());
    let url = server.uri().parse().unwrap();
    store
        .set_cookie(&url, Cookie::new("XSRF-TOKEN", "tok1"))
        .unwrap();

    let session = SessionContext::resume(store, &settings).unwrap();
    Client::new(settings, session)
}

fn nsx_group() -> DownloadGroupRequest {
    DownloadGroupRequest {
        download_group: "NSX-T-30110".to_string(),
        product_id: 982,
    }
}

async fn mount_download_group(server: &MockServer, eligible: bool) {
    Mock::given(matchers::method("GET"))
        .and(matchers::path(
            "/channel/public/api/v1.0/products/getDLGHeader",
        ))
        .and(matchers::query_param("downloadGroup", "NSX-T-30110"))
        .and(matchers::query_param("productId", "982"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "dlg": { "code": "NSX-T-30110", "tagId": 4710, "type": "Product Binaries &amp; Tools" },
            "product": { "id": 982, "name": "VMware NSX-T Data Center" }
        })))
        .mount(server)
        .await;

    Mock::given(matchers::method("GET"))
        .and(matchers::path("/channel/api/v1.0/dlg/details"))
        .and(matchers::header("x-xsrf-token", "tok1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloadFiles": [
                {
                    "fileName": "nsx-edge-3.1.1.0.0.17483065.ova",
                    "md5checksum": "aaa",
                    "uuid": "edge-uuid",
                    "releaseDate": "2021-04-15",
                    "version": "3.1.1"
                },
                {
                    "fileName": "nsx-unified-appliance-3.1.1.0.0.17483186.ova",
                    "md5checksum": "bbb",
                    "uuid": "appliance-uuid",
                    "releaseDate": "2021-04-15",
                    "version": "3.1.1"
                }
            ],
            "eligibilityResponse": { "eligibleToDownload": eligible }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_product_index() {
    let server = MockServer::start().await;
    Mock::given(matchers::path(
        "/channel/public/api/v1.0/products/getProductsAtoZ",
    ))
    .and(matchers::query_param("isPrivate", "true"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "productCategoryList": [{
            "name": "All Products",
            "productList": [{
                "name": "VMware NSX-T Data Center",
                "actions": [{
                    "linkname": "View Download Components",
                    "target": "./info/slug/networking_security/vmware_nsx_t_data_center/3_x"
                }]
            }]
        }]
    })))
    .expect(1)
    .mount(&server)
    .await;

    let index = client(&server).await.catalog().product_index().await.unwrap();

    assert_eq!(index.len(), 1);
    assert_eq!(index[0].category, "networking_security");
    assert_eq!(index[0].product, "vmware_nsx_t_data_center");
    assert_eq!(index[0].version, "3_x");
}

#[tokio::test]
async fn test_request_download() {
    let server = MockServer::start().await;
    mount_download_group(&server, true).await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/channel/api/v1.0/dlg/download"))
        .and(matchers::body_json(json!({
            "locale": "en_US",
            "downloadGroup": "NSX-T-30110",
            "productId": 982,
            "md5checksum": "bbb",
            "tagId": 4710,
            "uUId": "appliance-uuid",
            "dlgType": "Product Binaries & Tools",
            "productFamily": "VMware NSX-T Data Center",
            "releaseDate": "2021-04-15",
            "dlgVersion": "3.1.1",
            "isBetaFlow": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "downloadURL": "https://download2.vmware.com/software/nsx.ova?params=signed",
            "fileName": "nsx-unified-appliance-3.1.1.0.0.17483186.ova"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client(&server)
        .await
        .catalog()
        .request_download(&nsx_group(), "nsx-unified-appliance")
        .await
        .unwrap();

    assert_eq!(
        response.download_url.as_deref(),
        Some("https://download2.vmware.com/software/nsx.ova?params=signed")
    );
}

#[tokio::test]
async fn test_request_download_not_eligible() {
    let server = MockServer::start().await;
    mount_download_group(&server, false).await;
    Mock::given(matchers::path("/channel/api/v1.0/dlg/download"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client(&server)
        .await
        .catalog()
        .request_download(&nsx_group(), "nsx-unified-appliance")
        .await
        .unwrap_err();

    assert!(matches!(error, RequestDownloadError::NotEligible { .. }));
}

#[tokio::test]
async fn test_request_download_no_matching_file() {
    let server = MockServer::start().await;
    mount_download_group(&server, true).await;

    let error = client(&server)
        .await
        .catalog()
        .request_download(&nsx_group(), "^nsx-intelligence")
        .await
        .unwrap_err();

    assert!(matches!(error, RequestDownloadError::NoMatchingFile { .. }));
}

#[tokio::test]
async fn test_invalid_pattern_fails_before_requests() {
    let server = MockServer::start().await;
    Mock::given(matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let error = client(&server)
        .await
        .catalog()
        .request_download(&nsx_group(), "nsx-(")
        .await
        .unwrap_err();

    assert!(matches!(error, RequestDownloadError::InvalidPattern(_)));
}

#[tokio::test]
async fn test_session_expiry_surfaces_through_catalog() {
    let server = MockServer::start().await;
    Mock::given(matchers::path("/channel/api/v1.0/dlg/details"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server).await;
    let catalog = client.catalog();

    let first = catalog.get_dlg_details(&nsx_group()).await.unwrap_err();
    let second = catalog.eula_accept(&nsx_group()).await.unwrap_err();

    assert!(matches!(first, ApiError::SessionExpired(_)));
    assert!(matches!(second, ApiError::SessionExpired(_)));
    assert!(client.session().is_expired());
}

#[tokio::test]
async fn test_forbidden_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(matchers::path(
        "/channel/api/v1.0/products/getMyLicensedProducts",
    ))
    .respond_with(ResponseTemplate::new(403))
    .expect(1)
    .mount(&server)
    .await;

    let client = client(&server).await;
    let error = client
        .catalog()
        .get_my_licensed_products()
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::Forbidden(_)));
    assert!(!client.session().is_expired());
}

#[tokio::test]
async fn test_account_info_body() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/channel/api/v1.0/ems/accountinfo"))
        .and(matchers::body_json(json!({ "rowLimit": "3" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "userType": "customer" })))
        .expect(1)
        .mount(&server)
        .await;

    let info = client(&server).await.catalog().account_info().await.unwrap();

    assert_eq!(info["userType"], "customer");
}
