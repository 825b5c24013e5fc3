use std::path::PathBuf;
use std::str::FromStr;

use scriptline_core::search::{Page, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding `movies.csv`, `characters.csv`,
    /// `conversations.csv` and `lines.csv` (default: `data`).
    pub data_dir: PathBuf,
    /// `limit` applied when a list request omits it (default: `50`).
    pub default_page_limit: i64,
    /// Upper bound for `limit` on list requests (default: `250`).
    pub max_page_limit: i64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATA_DIR`             | `data`                     |
    /// | `DEFAULT_PAGE_LIMIT`   | `50`                       |
    /// | `MAX_PAGE_LIMIT`       | `250`                      |
    ///
    /// Panics on values that do not parse, so misconfiguration fails at
    /// startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "data".into());

        Self {
            host,
            port: parse_var("PORT", 3000),
            cors_origins,
            request_timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 30),
            data_dir: PathBuf::from(data_dir),
            default_page_limit: parse_var("DEFAULT_PAGE_LIMIT", DEFAULT_LIST_LIMIT),
            max_page_limit: parse_var("MAX_PAGE_LIMIT", MAX_LIST_LIMIT),
        }
    }

    /// Resolve a list request's raw `limit`/`offset` against the configured
    /// default and maximum.
    pub fn page(&self, limit: Option<i64>, offset: Option<i64>) -> Page {
        Page::resolve(limit, offset, self.default_page_limit, self.max_page_limit)
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            let expected = std::any::type_name::<T>();
            panic!("{key} must be a valid {expected}: {e}")
        }),
        Err(_) => default,
    }
}
