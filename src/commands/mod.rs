pub mod generate;
pub mod init;
pub mod login;
pub mod logout;
pub mod preview;
pub mod workspaces;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write report and Toggl settings to the configuration file")]
    Init(init::InitArgs),
    #[command(about = "Store the Toggl API token")]
    Login(login::LoginArgs),
    #[command(about = "Remove the stored Toggl API token")]
    Logout,
    #[command(about = "List the Toggl workspaces available to the token")]
    Workspaces(workspaces::WorkspacesArgs),
    #[command(about = "Build the monthly timesheet and save it as xlsx")]
    Generate(generate::GenerateArgs),
    #[command(about = "Print the monthly timesheet grid to the terminal")]
    Preview(preview::PreviewArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login(args) => login::cmd(args),
            Commands::Logout => logout::cmd(),
            Commands::Workspaces(args) => workspaces::cmd(args).await,
            Commands::Generate(args) => generate::cmd(args).await,
            Commands::Preview(args) => preview::cmd(args).await,
        }
    }
}
