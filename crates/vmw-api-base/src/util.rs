//! Utility functions for API operations.

/// Content types the portal answers with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentType {
    /// JSON content (application/json).
    Json,
    /// Plain text content.
    Text,
    /// HTML content, usually a login page served in place of an API response.
    Html,
    /// Unsupported content type.
    Unsupported(String),
}

impl ContentType {
    /// Reads the content type of a response, defaulting to JSON when the header is missing.
    pub fn of(response: &reqwest::Response) -> Self {
        response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ContentType::from)
            .unwrap_or(ContentType::Json)
    }
}

impl From<&str> for ContentType {
    fn from(content_type: &str) -> Self {
        if content_type.starts_with("application") && content_type.contains("json") {
            Self::Json
        } else if content_type.starts_with("text/plain") {
            Self::Text
        } else if content_type.starts_with("text/html") {
            Self::Html
        } else {
            Self::Unsupported(content_type.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_header_value() {
        assert_eq!(
            ContentType::from("application/json;charset=UTF-8"),
            ContentType::Json
        );
        assert_eq!(ContentType::from("application/problem+json"), ContentType::Json);
        assert_eq!(ContentType::from("text/plain"), ContentType::Text);
        assert_eq!(
            ContentType::from("text/html; charset=utf-8"),
            ContentType::Html
        );
        assert_eq!(
            ContentType::from("application/octet-stream"),
            ContentType::Unsupported("application/octet-stream".to_string())
        );
    }
}
