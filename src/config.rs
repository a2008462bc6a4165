use crate::error::{Error, Result};
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub github_api_url: String,
    pub github_token: Option<String>,
    pub bind_addr: SocketAddr,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            github_api_url: DEFAULT_API_URL.to_string(),
            github_token: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let github_api_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.github_api_url);

        let github_token = lookup("GITHUB_TOKEN").filter(|v| !v.trim().is_empty());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(v) => v
                .parse()
                .map_err(|_| Error::Config(format!("BIND_ADDR is not a socket address: {}", v)))?,
            None => defaults.bind_addr,
        };

        let http_timeout = match lookup("HTTP_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.parse().map_err(|_| {
                Error::Config(format!("HTTP_TIMEOUT_SECS is not a number: {}", v))
            })?),
            None => defaults.http_timeout,
        };

        Ok(Self {
            github_api_url,
            github_token,
            bind_addr,
            http_timeout,
        })
    }
}
