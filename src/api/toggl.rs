//! Toggl Track client.
//!
//! Authenticates with HTTP Basic auth using the API token as user name and
//! the literal `api_token` as password, lists workspaces and downloads the
//! detailed report of a month as CSV.

use super::{decode_csv, ensure_records, ReportSource};
use crate::libs::layout::settings::ReportPeriod;
use crate::libs::messages::Message;
use crate::libs::secret::{Secret, TOKEN_FILE_NAME};
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_API_URL: &str = "https://api.track.toggl.com";
pub const DEFAULT_USER_AGENT: &str = "tsheet";
pub const TOKEN_ENV: &str = "TOGGL_API_TOKEN";

const WORKSPACES_URL: &str = "api/v8/workspaces";
const DETAILS_CSV_URL: &str = "reports/api/v2/details.csv";
const API_TOKEN_PASSWORD: &str = "api_token";
const MAX_RETRY_COUNT: u32 = 3;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TogglConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<u64>,
    /// Sent as the `user_agent` query parameter the reports API requires.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for TogglConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            workspace_id: None,
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Workspace {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub admin: bool,
}

#[derive(Debug)]
pub struct Toggl {
    client: Client,
    config: TogglConfig,
    token: String,
}

impl Toggl {
    pub fn new(config: &TogglConfig, token: &str) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            token: token.to_owned(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_url.trim_end_matches('/'), path)
    }

    pub fn workspace_id(&self) -> Result<u64> {
        match self.config.workspace_id {
            Some(id) => Ok(id),
            None => msg_bail_anyhow!(Message::WorkspaceNotConfigured),
        }
    }

    /// Query of the detailed report covering the whole month.
    pub fn report_query(&self, period: &ReportPeriod) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            ("user_agent", self.config.user_agent.clone()),
            ("workspace_id", self.workspace_id()?.to_string()),
            ("since", period.first_day()?.format("%Y-%m-%d").to_string()),
            ("until", period.last_day()?.format("%Y-%m-%d").to_string()),
        ])
    }

    pub async fn workspaces(&self) -> Result<Vec<Workspace>> {
        let res = self.get(&self.url(WORKSPACES_URL), &[]).await?;
        let workspaces = res.json::<Vec<Workspace>>().await?;
        debug!("Toggl returned {} workspaces", workspaces.len());

        Ok(workspaces)
    }

    /// GET with Basic auth, retrying while Toggl rate-limits the token.
    async fn get(&self, url: &str, query: &[(&'static str, String)]) -> Result<Response> {
        let mut retries = 0;
        loop {
            let res = self
                .client
                .get(url)
                .basic_auth(&self.token, Some(API_TOKEN_PASSWORD))
                .query(query)
                .send()
                .await?;

            match res.status() {
                StatusCode::TOO_MANY_REQUESTS if retries < MAX_RETRY_COUNT => {
                    retries += 1;
                    warn!("Toggl rate limit hit, retry {} of {}", retries, MAX_RETRY_COUNT);
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
                status if status.is_success() => return Ok(res),
                status => return Err(msg_error_anyhow!(Message::TogglRequestFailed(status.to_string()))),
            }
        }
    }
}

impl ReportSource for Toggl {
    async fn fetch(&self, period: &ReportPeriod) -> Result<String> {
        let query = self.report_query(period)?;
        info!("Downloading Toggl detailed report {:?}", query);

        let res = self.get(&self.url(DETAILS_CSV_URL), &query).await?;
        let bytes = res.bytes().await?;

        ensure_records(decode_csv(&bytes))
    }
}

/// Picks the API token from the flag, then `TOGGL_API_TOKEN`, then the
/// token saved by `tsheet login`.
pub fn resolve_token(explicit: Option<&str>) -> Result<String> {
    resolve_token_with(explicit, &Secret::new(TOKEN_FILE_NAME))
}

pub fn resolve_token_with(explicit: Option<&str>, stored: &Secret) -> Result<String> {
    if let Some(token) = explicit.map(str::trim).filter(|token| !token.is_empty()) {
        return Ok(token.to_string());
    }
    if let Ok(token) = env::var(TOKEN_ENV) {
        if !token.trim().is_empty() {
            return Ok(token.trim().to_string());
        }
    }
    match stored.load()? {
        Some(token) => Ok(token),
        None => msg_bail_anyhow!(Message::TokenMissing),
    }
}
