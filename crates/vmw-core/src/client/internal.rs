use vmw_api_base::Configuration;

use crate::{auth::SessionContext, ApiError, ClientSettings, SessionExpiredError};

/// State behind a [`Client`](crate::Client), shared by all its clones.
#[derive(Debug)]
pub struct InternalClient {
    pub(crate) settings: ClientSettings,
    pub(crate) session: SessionContext,
    pub(crate) api_configuration: Configuration,
}

impl InternalClient {
    /// Configuration for the endpoint bindings, scoped to the portal and carrying the session.
    ///
    /// Fails without touching the network once the session has expired.
    pub fn get_api_configuration(&self) -> Result<&Configuration, ApiError> {
        if self.session.is_expired() {
            return Err(SessionExpiredError.into());
        }
        Ok(&self.api_configuration)
    }

    /// The session this client was built from.
    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }
}
