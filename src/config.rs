use dotenvy::dotenv;
use log::LevelFilter;
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;

const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "loupan.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub bind_address: String,
    /// File path or http(s) URL of the listings document.
    pub data_source: String,
    pub max_workers: usize,
    pub log_level: String,
    pub page_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            data_source: "public/hanzhong_loupan_data.json".to_string(),
            max_workers: 8,
            log_level: "info".to_string(),
            page_title: "汉中楼盘信息".to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

impl Config {
    pub fn log_level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

pub fn parse_config(raw: &str, path: &str) -> Result<Config, ConfigError> {
    toml::from_str(raw).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Reads the file named by `CONFIG_PATH` (or `loupan.toml`).
/// A missing default file means built-in defaults; a missing explicit file is an error.
pub fn read_config() -> Result<Config, ConfigError> {
    dotenv().ok();

    let explicit = env::var(CONFIG_PATH_ENV).ok();
    let path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    if explicit.is_none() && !Path::new(path).exists() {
        return Ok(Config::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_config(&raw, path)
}
