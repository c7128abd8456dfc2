//! Server configuration loaded from the environment.

use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

/// Bytes in one megabyte, as used for upload limits.
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Slack allowed on top of the upload limit for multipart framing.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Configuration errors.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} has invalid value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected \"text\" or \"json\", got {other:?}")),
        }
    }
}

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Largest accepted upload, in megabytes.
    pub max_file_mb: f64,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_file_mb: 20.0,
            log_format: LogFormat::Text,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables.
    ///
    /// - `DOCTOOLS_HOST` (default `0.0.0.0`)
    /// - `PORT` (default `8000`)
    /// - `MAX_FILE_MB` (default `20`)
    /// - `DOCTOOLS_LOG_FORMAT` (`text` or `json`, default `text`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("DOCTOOLS_HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;
        let max_file_mb = parse_var(&lookup, "MAX_FILE_MB", defaults.max_file_mb)?;
        if !(max_file_mb.is_finite() && max_file_mb > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "MAX_FILE_MB",
                value: max_file_mb.to_string(),
                reason: "must be a positive number".to_string(),
            });
        }
        let log_format = parse_var(&lookup, "DOCTOOLS_LOG_FORMAT", defaults.log_format)?;

        Ok(Self {
            host,
            port,
            max_file_mb,
            log_format,
        })
    }

    /// Set the upload limit.
    pub fn with_max_file_mb(mut self, max_file_mb: f64) -> Self {
        self.max_file_mb = max_file_mb;
        self
    }

    /// Upload limit in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        (self.max_file_mb * BYTES_PER_MB) as usize
    }

    /// Request body limit: the upload limit plus multipart framing.
    pub fn body_limit_bytes(&self) -> usize {
        self.max_upload_bytes()
            .saturating_add(MULTIPART_OVERHEAD_BYTES)
    }

    /// Socket address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|e: std::net::AddrParseError| ConfigError::InvalidValue {
            name: "DOCTOOLS_HOST",
            value: addr.clone(),
            reason: e.to_string(),
        })
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            name,
            value,
            reason: e.to_string(),
        }),
    }
}
