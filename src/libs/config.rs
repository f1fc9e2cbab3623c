//! Persistent settings for tsheet.
//!
//! The configuration is a JSON file (`config.json`) inside the platform data
//! directory resolved by [`DataStorage`]. Every section is optional and
//! omitted from the file while unset:
//!
//! - **toggl**: API endpoint, workspace and user agent used to download the
//!   detailed report.
//! - **report**: company and person printed in the sheet header, page
//!   height and default output path.
//!
//! A missing file is not an error: [`Config::read`] returns the defaults.
//! A file that exists but cannot be parsed is.
//!
//! ```rust,no_run
//! use tsheet::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.report_mut().company = "ACME S.r.l.".to_string();
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::layout::pagination::DEFAULT_PAGE_HEIGHT;
use crate::api::toggl::TogglConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_OUTPUT: &str = "output/timesheet.xlsx";

/// Sheet header values and output defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Printed next to `Società`.
    #[serde(default)]
    pub company: String,
    /// Printed next to `Risorsa`.
    #[serde(default)]
    pub person: String,
    #[serde(default = "default_page_height")]
    pub page_height: u32,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_page_height() -> u32 {
    DEFAULT_PAGE_HEIGHT
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company: String::new(),
            person: String::new(),
            page_height: default_page_height(),
            output: default_output(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggl: Option<TogglConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    /// Loads the configuration from the default data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config = serde_json::from_str(&config_str).with_context(|| format!("Failed to parse {}", config_file_path.display()))?;

        Ok(config)
    }

    /// Writes the configuration as pretty JSON to the default data directory.
    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let json = serde_json::to_string_pretty(&self)?;
        fs::write(config_file_path, json)?;

        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        Self::delete_from(&DataStorage::new())
    }

    pub fn delete_from(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;

        Ok(true)
    }

    pub fn toggl_mut(&mut self) -> &mut TogglConfig {
        self.toggl.get_or_insert_with(TogglConfig::default)
    }

    pub fn report_mut(&mut self) -> &mut ReportConfig {
        self.report.get_or_insert_with(ReportConfig::default)
    }
}
