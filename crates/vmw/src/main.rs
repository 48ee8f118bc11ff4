#![doc = include_str!("../README.md")]

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use color_eyre::eyre::Result;
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
};
use vmw_catalog::CatalogClientExt;
use vmw_cli::install_color_eyre;

use crate::{command::*, render::CommandResult};

mod auth;
mod catalog;
mod command;
mod render;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // the log level hierarchy is determined by:
    //    - if RUST_LOG is detected at runtime
    //    - if RUST_LOG is provided at compile time
    //    - default to INFO
    let filter = EnvFilter::builder()
        .with_default_directive(
            option_env!("RUST_LOG")
                .unwrap_or("info")
                .parse()
                .expect("should provide valid log level at compile time."),
        )
        // parse directives from the RUST_LOG environment variable,
        // overriding the default directive for matching targets.
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    install_color_eyre(cli.color)?;
    let render_config = render::RenderConfig::new(&cli);

    let Some(command) = cli.command.clone() else {
        let mut cmd = Cli::command();
        cmd.print_help()?;
        return Ok(());
    };

    let result = process_commands(&cli, command).await;

    // Render the result of the command
    render_config.render_result(result)
}

async fn process_commands(cli: &Cli, command: Commands) -> CommandResult {
    match command {
        Commands::Login => {
            auth::login(cli).await?;
            Ok("Successfully logged in!".into())
        }

        Commands::Catalog(command) => {
            let client = auth::login(cli).await?;
            command.run(&client.catalog()).await
        }

        Commands::Completion { shell } => {
            let Some(shell) = shell.or_else(Shell::from_env) else {
                return Ok(
                    "Couldn't autodetect a valid shell. Run `vmw completion --help` for more info."
                        .into(),
                );
            };

            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(().into())
        }
    }
}
