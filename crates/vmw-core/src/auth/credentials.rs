use std::fmt;

use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Username and password for the portal.
///
/// Never persisted by the SDK. Both fields are wiped from memory on drop.
#[derive(Clone, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Credentials {
    /// Account name, usually an email address.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates a new set of credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}
