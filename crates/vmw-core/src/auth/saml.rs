use std::{fmt, sync::LazyLock};

use regex::Regex;

/// Hidden form field carrying the assertion in the identity provider's response page.
///
/// Attribute names are matched case-insensitively and may be separated by any whitespace.
static SAML_RESPONSE_FIELD: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r#"(?i)NAME="SAMLResponse"\s*VALUE="([^"]+)""#).unwrap()
});

/// Opaque SAML assertion issued by the identity provider.
///
/// Forwarded to the portal verbatim and never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct SamlResponse(String);

impl SamlResponse {
    /// The assertion as issued, still base64 encoded.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SamlResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SamlResponse({} bytes)", self.0.len())
    }
}

/// Extracts the SAML assertion from the credential submission's response body.
///
/// Line breaks are removed before matching, so the attributes may be split over several lines.
/// Returns None when the page carries no assertion, which is what the identity provider returns
/// for rejected credentials.
pub fn extract_saml_response(body: &str) -> Option<SamlResponse> {
    let normalized: String = body.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    SAML_RESPONSE_FIELD
        .captures(&normalized)
        .and_then(|captures| captures.get(1))
        .map(|value| SamlResponse(value.as_str().to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_from_form_page() {
        let body = vmw_test::portal::saml_form_page("PHNhbWxwOlJlc3BvbnNlPg==");

        let saml = extract_saml_response(&body).unwrap();

        assert_eq!(saml.as_str(), "PHNhbWxwOlJlc3BvbnNlPg==");
    }

    #[test]
    fn test_extract_with_line_break_inside_tag() {
        let body = "<INPUT TYPE=\"HIDDEN\" NAME=\"SAMLResponse\"\r\nVALUE=\"abc+/=\"/>";

        let saml = extract_saml_response(body).unwrap();

        assert_eq!(saml.as_str(), "abc+/=");
    }

    #[test]
    fn test_extract_case_insensitive_attributes() {
        let body = r#"<input type="hidden" name="SAMLResponse" value="xyz"/>"#;

        assert_eq!(extract_saml_response(body).unwrap().as_str(), "xyz");
    }

    #[test]
    fn test_extract_missing_field() {
        let body = "<html><body>Invalid username or password</body></html>";

        assert!(extract_saml_response(body).is_none());
    }

    #[test]
    fn test_extract_empty_value() {
        let body = r#"<INPUT NAME="SAMLResponse" VALUE=""/>"#;

        assert!(extract_saml_response(body).is_none());
    }

    #[test]
    fn test_debug_does_not_leak_assertion() {
        let saml = SamlResponse("secret-assertion".to_owned());

        assert!(!format!("{saml:?}").contains("secret-assertion"));
    }
}
