//! End to end tests of the vmw CLI against a mocked portal

use std::io::Write;

use vmw_test::portal::{credential_submit_mock, landing_mock, mount_successful_login};
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

mod common;
use common::{vmw, vmw_against};

#[tokio::test(flavor = "multi_thread")]
async fn test_login_with_environment_credentials() {
    let server = MockServer::start().await;
    mount_successful_login(&server, "abc123", "tok1").await;

    let output = vmw_against(&server)
        .arg("login")
        .env("VMWUSER", "user@example.com")
        .env("VMWPASS", "hunter2")
        .output()
        .expect("Failed to execute vmw command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Successfully logged in!"), "{}", stdout);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_credentials_fail() {
    let server = MockServer::start().await;
    landing_mock().mount(&server).await;
    credential_submit_mock("<html>Invalid username or password</html>")
        .mount(&server)
        .await;

    let output = vmw_against(&server)
        .args(["login", "--username", "user@example.com", "--password", "wrong"])
        .output()
        .expect("Failed to execute vmw command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("AUTH_PARSE"), "{}", stderr);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_products_from_credentials_file() {
    let server = MockServer::start().await;
    mount_successful_login(&server, "abc123", "tok1").await;
    Mock::given(matchers::path(
        "/channel/public/api/v1.0/products/getProductsAtoZ",
    ))
    .and(matchers::header("x-xsrf-token", "tok1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "productCategoryList": [{
            "productList": [{
                "name": "VMware NSX-T Data Center",
                "actions": [{
                    "linkname": "View Download Components",
                    "target": "./info/slug/networking_security/vmware_nsx_t_data_center/3_x"
                }]
            }]
        }]
    })))
    .mount(&server)
    .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "username": "user@example.com", "password": "hunter2" }}"#
    )
    .unwrap();

    let output = vmw_against(&server)
        .arg("products")
        .arg("--credentials")
        .arg(file.path())
        .output()
        .expect("Failed to execute vmw command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let products: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(products[0]["product"], "vmware_nsx_t_data_center");
    assert_eq!(products[0]["dlgType"], "PRODUCT_BINARY");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_session_expired_is_reported() {
    let server = MockServer::start().await;
    mount_successful_login(&server, "abc123", "tok1").await;
    Mock::given(matchers::path("/channel/api/v1.0/dlg/details"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;

    let output = vmw_against(&server)
        .args(["dlg-details", "-g", "NSX-T-30110", "-i", "982"])
        .env("VMWUSER", "user@example.com")
        .env("VMWPASS", "hunter2")
        .output()
        .expect("Failed to execute vmw command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Session timed out"), "{}", stderr);
}

#[test]
fn test_missing_credentials_without_interaction() {
    let output = vmw()
        .args(["login", "--nointeraction"])
        .output()
        .expect("Failed to execute vmw command");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("Missing credentials"), "{}", stderr);
}
