use reqwest::Url;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_EVENT_STORE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}'")]
    InvalidPort(String),

    #[error("invalid EVENT_STORE_URL '{value}': {reason}")]
    InvalidStoreUrl { value: String, reason: String },

    #[error("invalid UPSTREAM_STATUS_MODE '{0}', expected 'compat' or 'preserve'")]
    InvalidStatusMode(String),
}

/// How POST/PUT report a non-OK, non-404 answer from the event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpstreamStatusMode {
    /// Always answer 500, whatever the store said.
    #[default]
    Compat,
    /// Relay the store's own error status.
    Preserve,
}

impl FromStr for UpstreamStatusMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compat" => Ok(Self::Compat),
            "preserve" => Ok(Self::Preserve),
            _ => Err(ConfigError::InvalidStatusMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub event_store_url: Url,
    pub status_mode: UpstreamStatusMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let raw_url = lookup("EVENT_STORE_URL").unwrap_or_else(|| DEFAULT_EVENT_STORE_URL.to_string());
        let event_store_url = parse_store_url(&raw_url)?;

        let status_mode = match lookup("UPSTREAM_STATUS_MODE") {
            Some(raw) => raw.parse()?,
            None => UpstreamStatusMode::default(),
        };

        debug!("Event store: {}", event_store_url);
        debug!("Upstream status mode: {:?}", status_mode);

        Ok(Self {
            host,
            port,
            event_store_url,
            status_mode,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_store_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidStoreUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidStoreUrl {
            value: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    Ok(url)
}
