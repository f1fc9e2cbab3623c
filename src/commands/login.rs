use crate::{
    libs::{
        messages::Message,
        secret::{Secret, TOKEN_FILE_NAME},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Toggl API token, found under Profile settings in Toggl Track
    #[arg(short, long, required = true)]
    token: String,
}

pub fn cmd(login_args: LoginArgs) -> Result<()> {
    let token = login_args.token.trim();
    if token.is_empty() {
        msg_bail_anyhow!(Message::TokenEmpty);
    }

    Secret::new(TOKEN_FILE_NAME).store(token)?;
    msg_success!(Message::TokenSaved);

    Ok(())
}
