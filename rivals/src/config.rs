use std::path::PathBuf;

use consts::{
    env, DEFAULT_CACHE_PATH, DEFAULT_LOG_LEVEL, DEFAULT_SUBSCRIPTIONS_PATH, REQUEST_DELAY,
    RETRO_API_URL,
};
use log::LevelFilter;
use reqwest::Url;
use thiserror::Error;
use web_time::Duration;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} is not a valid url: {reason}")]
    InvalidUrl { name: &'static str, reason: String },
    #[error("{name} must be a whole number of milliseconds, got {value:?}")]
    InvalidDelay { name: &'static str, value: String },
    #[error("{name} is not a log level: {value:?}")]
    InvalidLogLevel { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: Url,
    pub api_key: String,
    pub username: String,
    pub cache_path: PathBuf,
    pub subscriptions_path: PathBuf,
    pub request_delay: Duration,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let api_url = match lookup(env::API_URL) {
            Some(raw) => Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl {
                name: env::API_URL,
                reason: e.to_string(),
            })?,
            None => RETRO_API_URL.clone(),
        };

        let request_delay = match lookup(env::REQUEST_DELAY_MS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay {
                    name: env::REQUEST_DELAY_MS,
                    value: raw,
                })?,
            None => REQUEST_DELAY,
        };

        let level = lookup(env::LOG_LEVEL).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_level = level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel {
                name: env::LOG_LEVEL,
                value: level.clone(),
            })?;

        Ok(Self {
            api_url,
            api_key: required(env::API_KEY)?,
            username: required(env::USERNAME)?,
            cache_path: lookup(env::CACHE_PATH)
                .unwrap_or_else(|| DEFAULT_CACHE_PATH.to_string())
                .into(),
            subscriptions_path: lookup(env::SUBSCRIPTIONS_PATH)
                .unwrap_or_else(|| DEFAULT_SUBSCRIPTIONS_PATH.to_string())
                .into(),
            request_delay,
            log_level,
        })
    }
}
