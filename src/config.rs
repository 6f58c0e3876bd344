//! Environment-driven configuration.
//!
//! All settings come from the environment, with CLI flags taking precedence
//! for the values they cover:
//! - `GITPULSE_DB`: path to the SQLite database file (default `gitpulse.db`)
//! - `GITHUB_TOKEN`: bearer token for the GitHub API (optional; unauthenticated
//!   requests are rate-limited much more aggressively)
//! - `GITHUB_API_URL`: API base URL (default `https://api.github.com`)
//! - `PORT`: listen port (default 5000)

use std::path::PathBuf;

use crate::error::{AppError, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: PathBuf,
    pub github_token: Option<String>,
    pub github_api_url: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let database_path = std::env::var("GITPULSE_DB")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("gitpulse.db"));

        let github_token = std::env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let github_api_url =
            std::env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("invalid PORT value: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_path,
            github_token,
            github_api_url,
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("gitpulse.db"),
            github_token: None,
            github_api_url: DEFAULT_API_URL.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
