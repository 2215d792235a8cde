//! Server configuration from environment variables.

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} is not a valid number: {value}")]
    InvalidNumber { name: &'static str, value: String },
}

/// Runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Directory holding the learner and admin pages.
    pub public_dir: PathBuf,
    pub db_max_connections: u32,
    /// Request body limit for upload endpoints.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Env vars:
    /// - DATABASE_URL: PostgreSQL connection string (required)
    /// - HOST / PORT: bind address (default 0.0.0.0:3000)
    /// - PUBLIC_DIR: static pages directory (default "public")
    /// - DB_MAX_CONNECTIONS: pool size (default 10)
    /// - MAX_UPLOAD_BYTES: upload size limit (default 10 MiB)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        Ok(Self {
            database_url,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_number(&lookup, "PORT", DEFAULT_PORT)?,
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PUBLIC_DIR)),
            db_max_connections: parse_number(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            max_upload_bytes: parse_number(&lookup, "MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }

    /// Address to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { name, value }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "postgres://localhost/quiz")])).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/quiz");
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.db_max_connections, 10);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/quiz"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("PUBLIC_DIR", "/srv/quiz"),
            ("DB_MAX_CONNECTIONS", "4"),
            ("MAX_UPLOAD_BYTES", "1024"),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.public_dir, PathBuf::from("/srv/quiz"));
        assert_eq!(config.db_max_connections, 4);
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_missing_database_url() {
        let err = Config::from_lookup(lookup(&[("PORT", "3000")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db/quiz"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidNumber {
                name: "PORT",
                value: "eighty".to_string()
            }
        );
    }
}
