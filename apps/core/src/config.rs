//! Server configuration, read from environment variables.
//!
//! | Variable                  | Default     |
//! |---------------------------|-------------|
//! | `MAILWISE_HOST`           | `127.0.0.1` |
//! | `MAILWISE_PORT`           | `3000`      |
//! | `MAILWISE_LOG_FORMAT`     | `pretty`    |
//! | `MAILWISE_MAX_BODY_BYTES` | `65536`     |
//!
//! A `.env` file is loaded by the binary before reading them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const HOST_VAR: &str = "MAILWISE_HOST";
pub const PORT_VAR: &str = "MAILWISE_PORT";
pub const LOG_FORMAT_VAR: &str = "MAILWISE_LOG_FORMAT";
pub const MAX_BODY_BYTES_VAR: &str = "MAILWISE_MAX_BODY_BYTES";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
    /// Bunyan-compatible JSON
    Bunyan,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "bunyan" => Ok(LogFormat::Bunyan),
            other => Err(AppError::Config(format!(
                "{} must be one of pretty, json, bunyan (got '{}')",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Runtime configuration of the HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AppConfig {
    #[validate(length(min = 1))]
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
    /// Largest accepted request body.
    #[validate(range(min = 1))]
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            host: lookup(HOST_VAR)
                .map(|h| h.trim().to_string())
                .unwrap_or(defaults.host),
            port: match lookup(PORT_VAR) {
                Some(raw) => parse_number(PORT_VAR, &raw)?,
                None => defaults.port,
            },
            log_format: match lookup(LOG_FORMAT_VAR) {
                Some(raw) => raw.parse()?,
                None => defaults.log_format,
            },
            max_body_bytes: match lookup(MAX_BODY_BYTES_VAR) {
                Some(raw) => parse_number(MAX_BODY_BYTES_VAR, &raw)?,
                None => defaults.max_body_bytes,
            },
        };

        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(config)
    }

    /// Address the server listens on
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: FromStr>(var: &str, raw: &str) -> Result<T, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::Config(format!("{} must be a number (got '{}')", var, raw)))
}
