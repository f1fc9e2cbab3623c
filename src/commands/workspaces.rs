use crate::{
    api::toggl::{resolve_token, Toggl},
    libs::{config::Config, messages::Message, view::View},
    msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WorkspacesArgs {
    /// Toggl API token, overrides the stored one
    #[arg(short, long)]
    token: Option<String>,
}

pub async fn cmd(args: WorkspacesArgs) -> Result<()> {
    let config = Config::read()?.toggl.unwrap_or_default();
    let token = resolve_token(args.token.as_deref())?;

    let workspaces = Toggl::new(&config, &token).workspaces().await?;
    if workspaces.is_empty() {
        msg_warning!(Message::NoWorkspaces);
        return Ok(());
    }

    msg_print!(Message::WorkspacesHeader);
    View::workspaces(&workspaces)
}
