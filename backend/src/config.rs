//! Runtime configuration, read from `BILL_TRACKER_*` environment variables.

use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::storage::connection::DEFAULT_DATABASE_URL;

pub const DATABASE_URL_VAR: &str = "BILL_TRACKER_DATABASE_URL";
pub const ADDR_VAR: &str = "BILL_TRACKER_ADDR";
pub const CORS_ORIGIN_VAR: &str = "BILL_TRACKER_CORS_ORIGIN";
pub const CURRENCY_VAR: &str = "BILL_TRACKER_CURRENCY";
pub const SEED_FILE_VAR: &str = "BILL_TRACKER_SEED_FILE";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Frontend origin allowed by CORS
    pub cors_origin: HeaderValue,
    pub currency_symbol: String,
    /// JSON bill file to bulk-sync from at startup
    pub seed_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset or blank keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_addr = addr.trim().parse::<SocketAddr>().map_err(|e| ConfigError::InvalidValue {
            key: ADDR_VAR.to_string(),
            message: format!("'{}' is not a socket address: {}", addr, e),
        })?;

        let origin = get(CORS_ORIGIN_VAR).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        let cors_origin = HeaderValue::from_str(origin.trim()).map_err(|e| ConfigError::InvalidValue {
            key: CORS_ORIGIN_VAR.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            database_url: get(DATABASE_URL_VAR).unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            bind_addr,
            cors_origin,
            currency_symbol: get(CURRENCY_VAR).unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            seed_file: get(SEED_FILE_VAR).map(PathBuf::from),
        })
    }
}
