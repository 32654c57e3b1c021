//! Front end configuration, read from `./mp3_scout.ron`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use scout_engine::ClientSettings;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "mp3_scout.ron";
/// Overrides `api_base_url` when set to a non-empty value.
pub const API_BASE_URL_ENV: &str = "MP3_SCOUT_API_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_response_bytes: u64,
    pub log_to_file: bool,
    pub terminal_hyperlinks: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            api_base_url: client.api_base_url,
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_response_bytes: client.max_response_bytes,
            log_to_file: false,
            terminal_hyperlinks: true,
        }
    }
}

impl AppConfig {
    pub fn with_env_override(mut self, api_base_url: Option<String>) -> Self {
        if let Some(url) = api_base_url.filter(|url| !url.trim().is_empty()) {
            self.api_base_url = url;
        }
        self
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            api_base_url: self.api_base_url.clone(),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            max_response_bytes: self.max_response_bytes,
        }
    }
}

/// Reads the config file; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
