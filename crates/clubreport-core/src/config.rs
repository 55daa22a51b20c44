//! Application configuration management.
//!
//! Configuration is optional. It is read from
//! `~/.config/club-reporter/config.json` when that file exists, then any of
//! the following environment variables override it (a `.env` file in the
//! working directory is honoured by the binaries):
//!
//! - `CLUB_REPORTER_OUTPUT_DIR`: root directory for generated reports
//! - `CLUB_REPORTER_API_URL`: Sqorz API base URL
//! - `CLUB_REPORTER_AS_OF`: evaluate credential expiry as of this date

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::ApiConfig;
use crate::dates;

/// Application name used for the config directory path
const APP_NAME: &str = "club-reporter";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Reports land here (relative to the working directory) unless configured
const DEFAULT_OUTPUT_DIR: &str = "out";

const ENV_OUTPUT_DIR: &str = "CLUB_REPORTER_OUTPUT_DIR";
const ENV_API_URL: &str = "CLUB_REPORTER_API_URL";
const ENV_AS_OF: &str = "CLUB_REPORTER_AS_OF";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub output_dir: Option<PathBuf>,
    pub api_base_url: Option<String>,
    /// Fixed evaluation date for expiry checks, `YYYY-MM-DD` or RFC 3339.
    pub as_of: Option<String>,
}

impl Config {
    /// Load the config file (if any) and apply environment overrides.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Read a config file, falling back to defaults when it does not exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Apply overrides from `lookup`, normally the process environment.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        if let Some(dir) = get(ENV_OUTPUT_DIR) {
            self.output_dir = Some(PathBuf::from(dir));
        }
        if let Some(url) = get(ENV_API_URL) {
            self.api_base_url = Some(url);
        }
        if let Some(as_of) = get(ENV_AS_OF) {
            self.as_of = Some(as_of);
        }
        self
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
    }

    pub fn output_root(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    pub fn api_config(&self) -> ApiConfig {
        let mut api = ApiConfig::default();
        if let Some(ref url) = self.api_base_url {
            api.base_url = url.clone();
        }
        api
    }

    /// The moment credentials are judged against: the configured `as_of`
    /// date, or the current time.
    pub fn evaluation_time(&self) -> Result<DateTime<Utc>> {
        match self.as_of.as_deref() {
            Some(as_of) => dates::parse_date(as_of)
                .ok_or_else(|| anyhow::anyhow!("Invalid as_of date: {}", as_of)),
            None => Ok(Utc::now()),
        }
    }
}
