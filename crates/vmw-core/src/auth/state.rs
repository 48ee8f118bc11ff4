use std::fmt;

/// Progress of a session through the login handshake.
///
/// ```text
/// ANONYMOUS -> COOKIED -> SAML_OBTAINED -> SSO_COMPLETE -> AUTHENTICATED -> EXPIRED
///     \___________\______________\______________\_____________> FAILED
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginState {
    /// No cookies yet.
    Anonymous,
    /// The landing page issued the session-tracking cookies.
    Cookied,
    /// The identity provider accepted the credentials and returned a SAML assertion.
    SamlObtained,
    /// The portal accepted the assertion and set the authenticated cookies.
    SsoComplete,
    /// The CSRF token was captured; the session is usable.
    Authenticated,
    /// A handshake step failed. The handshake must restart from the beginning.
    Failed,
    /// The portal answered 401 to a request of this session.
    Expired,
}

impl LoginState {
    /// Returns true for states no request or handshake step can leave.
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoginState::Failed | LoginState::Expired)
    }
}

impl fmt::Display for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoginState::Anonymous => "ANONYMOUS",
            LoginState::Cookied => "COOKIED",
            LoginState::SamlObtained => "SAML_OBTAINED",
            LoginState::SsoComplete => "SSO_COMPLETE",
            LoginState::Authenticated => "AUTHENTICATED",
            LoginState::Failed => "FAILED",
            LoginState::Expired => "EXPIRED",
        };
        write!(f, "{}", s)
    }
}

/// The four steps of the login handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginStep {
    /// GET the login landing page for the initial cookies.
    Bootstrap,
    /// POST the credentials to the identity provider.
    CredentialSubmission,
    /// POST the SAML assertion to the portal.
    SsoExchange,
    /// Read the CSRF token from the cookie store.
    TokenCapture,
}

impl LoginStep {
    /// State reached when the step succeeds.
    pub fn target_state(&self) -> LoginState {
        match self {
            LoginStep::Bootstrap => LoginState::Cookied,
            LoginStep::CredentialSubmission => LoginState::SamlObtained,
            LoginStep::SsoExchange => LoginState::SsoComplete,
            LoginStep::TokenCapture => LoginState::Authenticated,
        }
    }
}

impl fmt::Display for LoginStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoginStep::Bootstrap => "step 1 (bootstrap)",
            LoginStep::CredentialSubmission => "step 2 (credential submission)",
            LoginStep::SsoExchange => "step 3 (SSO exchange)",
            LoginStep::TokenCapture => "step 4 (token capture)",
        };
        write!(f, "{}", s)
    }
}
