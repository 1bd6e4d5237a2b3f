//! Runtime settings read from the environment.

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://sports_management.db";

/// Server and store settings.
///
/// | Env var              | Default                         |
/// |----------------------|---------------------------------|
/// | `DATABASE_URL`       | `sqlite://sports_management.db` |
/// | `HOST`               | `127.0.0.1`                     |
/// | `PORT`               | `5000`                          |
/// | `DB_MAX_CONNECTIONS` | `5`                             |
/// | `DB_FOREIGN_KEYS`    | `true`                          |
/// | `BODY_LIMIT_BYTES`   | `65536`                         |
/// | `STATIC_DIR`         | unset                           |
#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// SQLite `PRAGMA foreign_keys`. When off, dangling team references are stored as-is and
    /// deleting a team leaves its players pointing at the removed id.
    pub foreign_keys: bool,
    pub body_limit_bytes: usize,
    /// Directory of browser assets served at `/` for paths no route claims.
    pub static_dir: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: DEFAULT_DATABASE_URL.into(),
            host: "127.0.0.1".into(),
            port: 5000,
            max_connections: 5,
            foreign_keys: true,
            body_limit_bytes: 64 * 1024,
            static_dir: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            foreign_keys: parse_bool_or(&lookup, "DB_FOREIGN_KEYS", defaults.foreign_keys)?,
            body_limit_bytes: parse_or(&lookup, "BODY_LIMIT_BYTES", defaults.body_limit_bytes)?,
            static_dir: lookup("STATIC_DIR").filter(|dir| !dir.trim().is_empty()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "on" | "yes" => Ok(true),
            "0" | "false" | "off" | "no" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}
