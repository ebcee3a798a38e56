use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

pub const CONFIG_FILE: &str = "agenda.toml";
pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the booking backend.
    pub api_url: String,
    /// Offset used to display appointment times. System local offset
    /// when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset_minutes: Option<i32>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            utc_offset_minutes: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|m| FixedOffset::east_opt(m.saturating_mul(60)))
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "agenda", "Agenda")
}

pub fn config_file(dirs: &ProjectDirs) -> PathBuf {
    dirs.config_dir().join(CONFIG_FILE)
}

/// Reads configuration from defaults, then `file` (if it exists), then
/// `AGENDA_*` environment variables.
pub fn load_config_from(file: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        .set_default("api_url", DEFAULT_API_URL)?
        .set_default("log_filter", DEFAULT_LOG_FILTER)?
        .add_source(::config::File::from(file).required(false))
        .add_source(::config::Environment::with_prefix("AGENDA"))
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Loads configuration from the project config directory. Writes a default
/// file first when there is none.
pub async fn load_config(dirs: &ProjectDirs) -> Result<Config> {
    let file = config_file(dirs);

    if !tokio::fs::try_exists(&file).await? {
        save_config(&file, &Config::default()).await?;
        info!("Created default configuration at {:?}", file);
    }

    load_config_from(&file)
}

pub async fn save_config(file: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = file.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let content = toml::to_string_pretty(config)?;
    tokio::fs::write(file, content).await?;
    Ok(())
}

/// Checks that `api_url` is an absolute URL.
pub fn api_url(config: &Config) -> Result<reqwest::Url> {
    config
        .api_url
        .parse()
        .map_err(|e| Error::InvalidUrl(format!("{}: {e}", config.api_url)))
}
