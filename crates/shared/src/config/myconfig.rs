use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

const DEFAULT_SESSION_FILE: &str = ".session/credentials.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub api_base_url: String,
    pub session_file: PathBuf,
    pub is_dev: bool,
    pub enable_file_log: bool,
}

impl Config {
    pub fn init() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port_str = var("PORT").context("Missing environment variable: PORT")?;
        let api_base_url =
            var("API_BASE_URL").context("Missing environment variable: API_BASE_URL")?;

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(anyhow!(
                "API_BASE_URL must start with http:// or https://, got '{}'",
                api_base_url
            ));
        }

        let session_file = var("SESSION_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let is_dev = var("DEV_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let enable_file_log = var("ENABLE_FILE_LOG")
            .map(|v| v == "true")
            .unwrap_or(false);

        Ok(Self {
            port,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            session_file,
            is_dev,
            enable_file_log,
        })
    }
}
