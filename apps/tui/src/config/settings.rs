use crate::error::ConfigError;
use crate::poller::DEFAULT_POLL_INTERVAL;
use crate::schedule::{is_valid_date_format, DEFAULT_DATE_FORMAT};
use dotenv::dotenv;
use std::env;
use std::time::Duration;
use url::Url;

pub const DISCOVERY_URL_VAR: &str = "LIGHTSCHED_DISCOVERY_URL";
pub const POLL_INTERVAL_VAR: &str = "LIGHTSCHED_POLL_INTERVAL_MS";
pub const REQUEST_TIMEOUT_VAR: &str = "LIGHTSCHED_REQUEST_TIMEOUT_MS";
pub const DATE_FORMAT_VAR: &str = "LIGHTSCHED_DATE_FORMAT";
pub const DEBUG_VAR: &str = "DEBUG";

pub const DEFAULT_DISCOVERY_URL: &str = "http://localhost:7000/url";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub discovery_url: Url,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub date_format: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            discovery_url: Url::parse(DEFAULT_DISCOVERY_URL)
                .unwrap_or_else(|_| unreachable!("default discovery URL parses")),
            poll_interval: DEFAULT_POLL_INTERVAL,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key → value source; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let discovery_url = match lookup(DISCOVERY_URL_VAR) {
            Some(value) => parse_url(DISCOVERY_URL_VAR, &value)?,
            None => defaults.discovery_url,
        };

        let poll_interval = match lookup(POLL_INTERVAL_VAR) {
            Some(value) => parse_millis(POLL_INTERVAL_VAR, &value)?,
            None => defaults.poll_interval,
        };

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            Some(value) => parse_millis(REQUEST_TIMEOUT_VAR, &value)?,
            None => defaults.request_timeout,
        };

        let date_format = match lookup(DATE_FORMAT_VAR).filter(|value| !value.trim().is_empty()) {
            Some(value) if !is_valid_date_format(&value) => {
                return Err(ConfigError::Invalid {
                    key: DATE_FORMAT_VAR,
                    value,
                    reason: "not a strftime format chrono understands".to_string(),
                });
            }
            Some(value) => value,
            None => defaults.date_format,
        };

        let debug = lookup(DEBUG_VAR).is_some_and(|value| !matches!(value.trim(), "" | "0" | "false"));

        Ok(Self {
            discovery_url,
            poll_interval,
            request_timeout,
            date_format,
            debug,
        })
    }
}

fn parse_url(key: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value.trim()).map_err(|e| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "not a base URL".to_string(),
        });
    }

    Ok(url)
}

fn parse_millis(key: &'static str, value: &str) -> Result<Duration, ConfigError> {
    let millis: u64 = value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: "expected a whole number of milliseconds".to_string(),
    })?;

    if millis == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(Duration::from_millis(millis))
}
