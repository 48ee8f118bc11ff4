use std::time::{Duration, SystemTime};

use reqwest::Url;

use super::CookieError;

/// Represents an HTTP cookie as received from a `Set-Cookie` header.
///
/// Matching follows RFC 6265: a cookie without a `Domain` attribute is host-only, the path
/// defaults to the directory of the URL that set it, and `Secure` cookies are only sent over
/// HTTPS.
#[derive(Clone, Debug, PartialEq)]
pub struct Cookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
    /// Cookie domain, without a leading dot
    pub domain: Option<String>,
    /// Only sent to the exact host in `domain`, set when the cookie had no `Domain` attribute
    pub host_only: bool,
    /// Cookie path
    pub path: Option<String>,
    /// Cookie expiration timestamp
    pub expires: Option<SystemTime>,
    /// Secure attribute (HTTPS-only)
    pub secure: bool,
    /// HttpOnly attribute (prevents JavaScript access)
    pub http_only: bool,
    /// SameSite attribute (CSRF protection)
    pub same_site: SameSite,
}

/// SameSite cookie attribute for cross-site request policy.
#[derive(Clone, Debug, PartialEq)]
pub enum SameSite {
    /// Cookie only sent to same-site requests
    Strict,
    /// Cookie sent to same-site and top-level navigation
    Lax,
    /// Cookie sent to all requests (requires Secure=true in most browsers)
    None,
}

impl Cookie {
    /// Creates a new cookie.
    ///
    /// Defaults: path="/", same_site=Lax, secure=false, http_only=false, no expiration, no domain.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            domain: None,
            host_only: false,
            path: Some("/".to_string()),
            expires: None,
            secure: false,
            http_only: false,
            same_site: SameSite::Lax,
        }
    }

    /// Parses the value of a `Set-Cookie` header.
    ///
    /// `Max-Age` takes precedence over `Expires`. A zero or negative `Max-Age` yields a cookie that
    /// is already expired, which stores treat as a deletion. A `Max-Age` beyond what the clock can
    /// represent yields a cookie that never expires.
    pub fn parse_set_cookie(header: &str) -> Result<Self, CookieError> {
        let parsed = cookie::Cookie::parse(header)
            .map_err(|e| CookieError::InvalidCookie(format!("{e}: {header}")))?;

        if parsed.name().is_empty() {
            return Err(CookieError::InvalidCookie(format!(
                "cookie without a name: {header}"
            )));
        }

        let expires = match parsed.max_age() {
            Some(max_age) if max_age.whole_seconds() <= 0 => Some(SystemTime::UNIX_EPOCH),
            Some(max_age) => {
                SystemTime::now().checked_add(Duration::from_secs(max_age.whole_seconds() as u64))
            }
            None => parsed.expires_datetime().map(SystemTime::from),
        };

        Ok(Self {
            name: parsed.name().to_string(),
            value: parsed.value().to_string(),
            domain: parsed
                .domain()
                .map(|d| d.trim_start_matches('.').to_ascii_lowercase())
                .filter(|d| !d.is_empty()),
            host_only: false,
            path: parsed
                .path()
                .filter(|p| p.starts_with('/'))
                .map(str::to_string),
            expires,
            secure: parsed.secure().unwrap_or(false),
            http_only: parsed.http_only().unwrap_or(false),
            same_site: match parsed.same_site() {
                Some(cookie::SameSite::Strict) => SameSite::Strict,
                Some(cookie::SameSite::None) => SameSite::None,
                _ => SameSite::Lax,
            },
        })
    }

    /// Returns true if the cookie has expired (past its expiration timestamp).
    pub fn is_expired(&self) -> bool {
        self.expires.is_some_and(|exp| SystemTime::now() >= exp)
    }

    /// Binds the cookie to the URL whose response set it.
    ///
    /// Fills in the host-only domain and the default path, and rejects a `Domain` attribute
    /// that does not cover the setting host.
    pub fn scope_to(mut self, url: &Url) -> Result<Self, CookieError> {
        let host = url
            .host_str()
            .ok_or_else(|| CookieError::InvalidCookie(format!("URL without host: {url}")))?
            .to_ascii_lowercase();

        match &self.domain {
            Some(domain) if !domain_matches(&host, domain) => {
                return Err(CookieError::SecurityViolation(format!(
                    "cookie `{}` for domain {domain} was set by {host}",
                    self.name
                )));
            }
            Some(_) => self.host_only = false,
            None => {
                self.domain = Some(host);
                self.host_only = true;
            }
        }

        if self.path.is_none() {
            self.path = Some(default_path(url));
        }

        self.validate_security_attributes()?;
        Ok(self)
    }

    /// Returns true if the cookie should be sent with a request to `url`.
    pub fn matches(&self, url: &Url) -> bool {
        let Some(host) = url.host_str().map(str::to_ascii_lowercase) else {
            return false;
        };

        let domain_ok = match &self.domain {
            Some(domain) if self.host_only => host == *domain,
            Some(domain) => domain_matches(&host, domain),
            None => true,
        };

        let path_ok = path_matches(url.path(), self.path.as_deref().unwrap_or("/"));
        let scheme_ok = !self.secure || url.scheme() == "https";

        domain_ok && path_ok && scheme_ok && !self.is_expired()
    }

    /// Validates the cookie name prefixes defined by RFC 6265bis.
    pub fn validate_security_attributes(&self) -> Result<(), CookieError> {
        if self.name.starts_with("__Secure-") && !self.secure {
            return Err(CookieError::SecurityViolation(
                "__Secure- prefix cookies must have Secure=true".to_string(),
            ));
        }

        if self.name.starts_with("__Host-") {
            if self.path.as_deref() != Some("/") {
                return Err(CookieError::SecurityViolation(format!(
                    "Cookie with __Host- prefix must have path=/ (got {:?})",
                    self.path
                )));
            }
            if self.domain.is_some() && !self.host_only {
                return Err(CookieError::SecurityViolation(
                    "__Host- prefix cookies cannot specify domain attribute".to_string(),
                ));
            }
            if !self.secure {
                return Err(CookieError::SecurityViolation(
                    "__Host- prefix cookies must have Secure=true".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Formats cookie as "name=value" for HTTP Cookie header injection.
    pub fn to_cookie_header(&self) -> String {
        format!("{}={}", self.name, self.value)
    }
}

fn domain_matches(host: &str, domain: &str) -> bool {
    host == domain
        || host
            .strip_suffix(domain)
            .is_some_and(|prefix| prefix.ends_with('.'))
}

fn path_matches(request_path: &str, cookie_path: &str) -> bool {
    if request_path == cookie_path {
        return true;
    }
    request_path.starts_with(cookie_path)
        && (cookie_path.ends_with('/')
            || request_path
                .strip_prefix(cookie_path)
                .is_some_and(|rest| rest.starts_with('/')))
}

/// Directory of the request path, as used when `Set-Cookie` carries no `Path`.
fn default_path(url: &Url) -> String {
    let path = url.path();
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path.chars().take(idx).collect(),
    }
}
