//! Configuration module for the bookmark forms service.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit log lines as JSON
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("BUKUFORMS_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:5001".to_string())
            .parse()?;

        let log_level = env::var("BUKUFORMS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = env::var("BUKUFORMS_LOG_JSON")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            log_level,
            log_json,
        })
    }
}
