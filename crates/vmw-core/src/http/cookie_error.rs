/// Errors that can occur during cookie storage operations.
#[derive(Debug, thiserror::Error)]
pub enum CookieError {
    /// Cookie storage backend operation failed (lock poisoned, I/O, etc.)
    #[error("Cookie storage operation failed: {0}")]
    StorageFailure(String),

    /// Cookie has invalid format or attributes
    #[error("Invalid cookie format or attributes: {0}")]
    InvalidCookie(String),

    /// Cookie not found by name
    #[error("Cookie not found: {name}")]
    NotFound {
        /// Name of the cookie that was not found
        name: String,
    },

    /// Cookie violates security policy (foreign domain, prefix rules)
    #[error("Cookie security policy violation: {0}")]
    SecurityViolation(String),
}
