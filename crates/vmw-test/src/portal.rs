//! Mocks of the portal login handshake.
//!
//! A single mock server plays both the portal and the identity provider, so the handshake sees
//! every cookie as host-only for the mock server's address.

use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

/// Path of the login landing page.
pub const LANDING_PATH: &str = "/web/vmware/login";
/// Path of the identity provider's credential submission.
pub const CREDENTIAL_SUBMIT_PATH: &str = "/oam/server/auth_cred_submit";
/// Path of the portal SSO endpoint.
pub const SSO_PATH: &str = "/vmwauth/saml/SSO";

/// Cookie set by the landing page.
pub const LANDING_COOKIE: &str = "JSESSIONID=landing-session";

/// Renders the auto-submitting form the identity provider returns after a credential POST.
pub fn saml_form_page(saml_response: &str) -> String {
    format!(
        "<HTML>\r\n<BODY Onload=\"document.forms[0].submit()\">\r\n\
         <FORM METHOD=\"POST\" ACTION=\"https://customerconnect.vmware.com/vmwauth/saml/SSO\">\r\n\
         <INPUT TYPE=\"HIDDEN\" NAME=\"SAMLResponse\" VALUE=\"{saml_response}\"/>\r\n\
         <NOSCRIPT><INPUT TYPE=\"SUBMIT\" VALUE=\"Continue\"/></NOSCRIPT>\r\n\
         </FORM>\r\n</BODY>\r\n</HTML>"
    )
}

/// Landing page answering with [`LANDING_COOKIE`].
pub fn landing_mock() -> Mock {
    Mock::given(matchers::method("GET"))
        .and(matchers::path(LANDING_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .append_header("Set-Cookie", format!("{LANDING_COOKIE}; Path=/; HttpOnly"))
                .set_body_raw("<html>login</html>", "text/html"),
        )
}

/// Credential submission answering with `body`, only when the landing cookie and the
/// application identifier are present.
pub fn credential_submit_mock(body: impl Into<String>) -> Mock {
    Mock::given(matchers::method("POST"))
        .and(matchers::path(CREDENTIAL_SUBMIT_PATH))
        .and(matchers::query_param("Auth-AppID", "WMVMWR"))
        .and(matchers::header("cookie", LANDING_COOKIE))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.into(), "text/html"))
}

/// SSO endpoint accepting the form-encoded `saml_response` and setting `cookies`.
pub fn sso_mock(saml_response: &str, cookies: &[&str]) -> Mock {
    let mut response = ResponseTemplate::new(200).set_body_raw("<html>welcome</html>", "text/html");
    for cookie in cookies {
        response = response.append_header("Set-Cookie", format!("{cookie}; Path=/"));
    }

    Mock::given(matchers::method("POST"))
        .and(matchers::path(SSO_PATH))
        .and(matchers::body_string_contains(format!(
            "SAMLResponse={saml_response}"
        )))
        .respond_with(response)
}

/// SSO endpoint redirecting to `location`, as the portal does when it rejects the assertion.
pub fn sso_redirect_mock(location: impl Into<String>) -> Mock {
    Mock::given(matchers::method("POST"))
        .and(matchers::path(SSO_PATH))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", location.into()))
}

/// Registers a full successful handshake issuing `XSRF-TOKEN=<xsrf_token>`.
pub async fn mount_successful_login(server: &MockServer, saml_response: &str, xsrf_token: &str) {
    landing_mock().mount(server).await;
    credential_submit_mock(saml_form_page(saml_response))
        .mount(server)
        .await;
    sso_mock(
        saml_response,
        &[
            "JSESSIONID=authenticated-session",
            &format!("XSRF-TOKEN={xsrf_token}"),
        ],
    )
    .mount(server)
    .await;
}
