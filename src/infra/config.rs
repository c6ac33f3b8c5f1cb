//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_SEED_COUNTRY_CODE: &str = "GH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Postgres connection string (required, no default).
    pub database_url: String,
    pub port: u16,
    /// Upper bound on concurrently open store connections.
    pub max_connections: u32,
    /// Deadline applied to every lookup made on behalf of an HTTP request.
    pub request_timeout: Duration,
    /// Directory holding the fixture JSON files.
    pub data_dir: PathBuf,
    /// Country assigned to region fixtures that do not name one.
    pub seed_country_code: String,
}

impl Config {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let max_connections = parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(anyhow!("DATABASE_MAX_CONNECTIONS must be at least 1"));
        }

        let timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(anyhow!("REQUEST_TIMEOUT_SECS must be at least 1"));
        }

        let data_dir = lookup("DATA_DIR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let seed_country_code = lookup("SEED_COUNTRY_CODE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SEED_COUNTRY_CODE.to_string());

        Ok(Self {
            database_url,
            port,
            max_connections,
            request_timeout: Duration::from_secs(timeout_secs),
            data_dir: PathBuf::from(data_dir),
            seed_country_code,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid {} value: {}", key, raw)),
        _ => Ok(default),
    }
}
