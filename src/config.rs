use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_API_URL;
use crate::cli::Cli;
use crate::fetch::FetchSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub categories: usize,
    pub clues_per_category: usize,
    pub offset_range: u32,
    pub max_draws: Option<u32>,
    pub request_timeout_secs: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            categories: fetch.categories,
            clues_per_category: fetch.clues_per_category,
            offset_range: fetch.offset_range,
            max_draws: fetch.max_draws,
            request_timeout_secs: 10,
            log_file: None,
        }
    }
}

pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "jeopardy")
}

pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().join("config.yaml"))
}

pub fn parse_config(content: &str) -> Result<Config, String> {
    if content.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
}

/// Load `explicit` if given (it must exist), else the default location if
/// present, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, String> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
    parse_config(&content)
}

impl Config {
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(url) = &cli.api_url {
            self.api_url = url.clone();
        }
        if let Some(n) = cli.categories {
            self.categories = n;
        }
        if let Some(n) = cli.clues {
            self.clues_per_category = n;
        }
        if let Some(path) = &cli.log_file {
            self.log_file = Some(path.clone());
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.categories == 0 {
            return Err("categories must be at least 1".to_string());
        }
        if self.clues_per_category == 0 {
            return Err("clues_per_category must be at least 1".to_string());
        }
        if self.offset_range == 0 {
            return Err("offset_range must be at least 1".to_string());
        }
        if self.api_url.trim().is_empty() {
            return Err("api_url must not be empty".to_string());
        }
        Ok(())
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            categories: self.categories,
            clues_per_category: self.clues_per_category,
            offset_range: self.offset_range,
            max_draws: self.max_draws,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
