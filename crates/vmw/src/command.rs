use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vmw_catalog::PRODUCT_BINARY;
use vmw_cli::Color;
use vmw_core::ClientSettings;

use crate::render::Output;

pub const USERNAME_ENV: &str = "VMWUSER";
pub const PASSWORD_ENV: &str = "VMWPASS";

#[derive(Parser, Clone)]
#[command(name = "vmw", version, about = "VMware Customer Connect CLI", long_about = None, disable_version_flag = true)]
pub struct Cli {
    // Optional as a workaround for https://github.com/clap-rs/clap/issues/3572
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[arg(short = 'o', long, global = true, value_enum, default_value_t = Output::JSON)]
    pub output: Output,

    #[arg(short = 'c', long, global = true, value_enum, default_value_t = Color::Auto)]
    pub color: Color,

    #[command(flatten)]
    pub credentials: CredentialArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[arg(
        short = 'q',
        long,
        global = true,
        help = "Don't return anything to stdout."
    )]
    pub quiet: bool,

    #[arg(
        long,
        global = true,
        help = "Do not prompt for interactive user input."
    )]
    pub nointeraction: bool,

    #[arg(short = 'v', long, action = clap::builder::ArgAction::Version)]
    pub version: (),
}

#[derive(Args, Clone)]
pub struct CredentialArgs {
    #[arg(short = 'u', long, global = true, env = USERNAME_ENV, help = "Account username")]
    pub username: Option<String>,

    #[arg(
        short = 'p',
        long,
        global = true,
        env = PASSWORD_ENV,
        hide_env_values = true,
        help = "Account password"
    )]
    pub password: Option<String>,

    #[arg(
        long,
        global = true,
        value_name = "FILE",
        help = "JSON file with `username` and `password` fields"
    )]
    pub credentials: Option<PathBuf>,
}

#[derive(Args, Clone)]
pub struct ServerArgs {
    #[arg(long, global = true, help = "Portal URL [default: https://customerconnect.vmware.com]")]
    pub portal_url: Option<String>,

    #[arg(long, global = true, help = "Identity provider URL [default: https://auth.vmware.com]")]
    pub identity_url: Option<String>,

    #[arg(long, global = true, value_name = "SECONDS", help = "Request timeout")]
    pub timeout: Option<u64>,
}

impl ServerArgs {
    pub fn settings(&self) -> ClientSettings {
        let defaults = ClientSettings::default();
        ClientSettings {
            portal_url: self.portal_url.clone().unwrap_or(defaults.portal_url),
            identity_url: self.identity_url.clone().unwrap_or(defaults.identity_url),
            timeout_secs: self.timeout,
            ..defaults
        }
    }
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    #[command(long_about = "Log in and check that the credentials are accepted.")]
    Login,

    #[command(flatten)]
    Catalog(CatalogCommands),

    #[command(long_about = "Generate shell completions.")]
    Completion {
        #[arg(long, help = "The shell to generate completions for.")]
        shell: Option<clap_complete::Shell>,
    },
}

#[derive(Subcommand, Clone)]
pub enum CatalogCommands {
    #[command(long_about = "Show account details.")]
    AccountInfo,

    #[command(long_about = "List the products of the catalog.")]
    Products {
        #[arg(long, help = "Print the catalog as returned by the portal.")]
        raw: bool,
    },

    #[command(long_about = "Show the header of a product version.")]
    ProductHeader(ProductArgs),

    #[command(long_about = "List the download groups of a product version.")]
    RelatedDlg {
        #[command(flatten)]
        product: ProductArgs,

        #[arg(long, default_value = PRODUCT_BINARY, help = "Download group type")]
        dlg_type: String,
    },

    #[command(long_about = "Show the header of a download group.")]
    DlgHeader(DownloadGroupArgs),

    #[command(long_about = "List the files of a download group.")]
    DlgDetails(DownloadGroupArgs),

    #[command(long_about = "Accept the EULA of a download group.")]
    EulaAccept(DownloadGroupArgs),

    #[command(long_about = "List the products the account is entitled to.")]
    Licensed,

    #[command(
        long_about = "Request a download URL for the first file of a download group matching a pattern."
    )]
    Download {
        #[command(flatten)]
        group: DownloadGroupArgs,

        #[arg(short = 'f', long, help = "Regular expression matched against file names")]
        file: String,
    },
}

#[derive(Args, Clone)]
pub struct ProductArgs {
    #[arg(long, help = "Category slug, e.g. networking_security")]
    pub category: String,

    #[arg(long, help = "Product slug, e.g. vmware_nsx_t_data_center")]
    pub product: String,

    #[arg(long, help = "Version slug, e.g. 3_x")]
    pub version: String,
}

#[derive(Args, Clone)]
pub struct DownloadGroupArgs {
    #[arg(short = 'g', long, help = "Download group code, e.g. NSX-T-30110")]
    pub download_group: String,

    #[arg(short = 'i', long, help = "Product identifier, e.g. 982")]
    pub product_id: i64,
}
