use color_eyre::eyre::Result;
use tracing::debug;
use vmw_core::Client;

use crate::command::Cli;

mod credentials;

/// Logs in with the credentials and server settings of the command line.
pub(crate) async fn login(cli: &Cli) -> Result<Client> {
    let credentials = credentials::resolve_credentials(&cli.credentials, !cli.nointeraction)?;
    let settings = cli.server.settings();

    debug!(username = %credentials.username, portal = %settings.portal_url, "Logging in");
    Ok(Client::login(settings, &credentials).await?)
}
