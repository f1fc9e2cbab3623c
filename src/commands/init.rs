//! Non-interactive configuration setup.
//!
//! Only the flags given are written; everything else in the existing
//! configuration is kept.

use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Company printed in the sheet header
    #[arg(short, long)]
    pub company: Option<String>,

    /// Person printed in the sheet header
    #[arg(short, long)]
    pub person: Option<String>,

    /// Toggl workspace to download reports from
    #[arg(short, long)]
    pub workspace: Option<u64>,

    /// Rows per printed page
    #[arg(long)]
    pub page_height: Option<u32>,

    /// Default path of the generated xlsx file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Toggl API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Value of the user_agent parameter sent to the reports API
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Remove the configuration file instead of writing it
    #[arg(short, long)]
    pub delete: bool,
}

impl InitArgs {
    /// Copies every given flag into `config`.
    pub fn apply(&self, config: &mut Config) {
        if self.company.is_some() || self.person.is_some() || self.page_height.is_some() || self.output.is_some() {
            let report = config.report_mut();
            if let Some(company) = &self.company {
                report.company = company.clone();
            }
            if let Some(person) = &self.person {
                report.person = person.clone();
            }
            if let Some(page_height) = self.page_height {
                report.page_height = page_height;
            }
            if let Some(output) = &self.output {
                report.output = output.clone();
            }
        }

        if self.workspace.is_some() || self.api_url.is_some() || self.user_agent.is_some() {
            let toggl = config.toggl_mut();
            if let Some(workspace) = self.workspace {
                toggl.workspace_id = Some(workspace);
            }
            if let Some(api_url) = &self.api_url {
                toggl.api_url = api_url.clone();
            }
            if let Some(user_agent) = &self.user_agent {
                toggl.user_agent = user_agent.clone();
            }
        }
    }
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        match Config::delete()? {
            true => msg_success!(Message::ConfigDeleted),
            false => msg_info!(Message::ConfigNotFound),
        }
        return Ok(());
    }

    let mut config = Config::read()?;
    init_args.apply(&mut config);
    config.save()?;

    msg_success!(Message::ConfigSaved);
    let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
    msg_info!(Message::ConfigShow(path.display().to_string()));
    Ok(())
}
