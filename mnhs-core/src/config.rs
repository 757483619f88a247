//! Database connection settings.
//!
//! Settings are resolved once at startup and handed to [`crate::Database`];
//! nothing here is global or mutable afterwards.
//!
//! Environment variables:
//!   MNHS_DB_HOST      (default: 127.0.0.1)
//!   MNHS_DB_PORT      (default: 5432)
//!   MNHS_DB_NAME      (default: mnhs)
//!   MNHS_DB_USER      (default: mnhs_user)
//!   MNHS_DB_PASSWORD  (default: mnhs_password)
//!   DATABASE_URL      (overrides all of the above when set)

use std::env;
use std::fmt;
use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

use crate::error::{MnhsError, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_DATABASE: &str = "mnhs";
const DEFAULT_USER: &str = "mnhs_user";
const DEFAULT_PASSWORD: &str = "mnhs_password";

/// Where and how to reach the records database
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Full connection URL; takes precedence over the individual fields
    pub url: Option<String>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database: DEFAULT_DATABASE.to_string(),
            user: DEFAULT_USER.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            url: None,
        }
    }
}

impl DbConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("MNHS_DB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                MnhsError::config(format!("MNHS_DB_PORT must be a port number, got '{}'", raw))
            })?,
            None => defaults.port,
        };

        Ok(Self {
            host: lookup("MNHS_DB_HOST").unwrap_or(defaults.host),
            port,
            database: lookup("MNHS_DB_NAME").unwrap_or(defaults.database),
            user: lookup("MNHS_DB_USER").unwrap_or(defaults.user),
            password: lookup("MNHS_DB_PASSWORD").unwrap_or(defaults.password),
            url: lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()),
        })
    }

    /// Replace the connection URL (e.g. from a `--database-url` flag).
    pub fn with_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.url = url;
        }
        self
    }

    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url)
                .map_err(|e| MnhsError::config(format!("invalid database URL: {}", e)))?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .port(self.port)
                .database(&self.database)
                .username(&self.user)
                .password(&self.password),
        };

        Ok(options.application_name("mnhs"))
    }

    /// Human-readable target without credentials, for logs.
    pub fn describe(&self) -> String {
        match &self.url {
            Some(_) => "DATABASE_URL".to_string(),
            None => format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database),
        }
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = DbConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, DbConfig::default());
        assert_eq!(cfg.port, 5432);
        assert!(cfg.url.is_none());
    }

    #[test]
    fn reads_each_variable() {
        let cfg = DbConfig::from_lookup(lookup_from(&[
            ("MNHS_DB_HOST", "db.internal"),
            ("MNHS_DB_PORT", "6543"),
            ("MNHS_DB_NAME", "lab3"),
            ("MNHS_DB_USER", "clerk"),
            ("MNHS_DB_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(cfg.host, "db.internal");
        assert_eq!(cfg.port, 6543);
        assert_eq!(cfg.database, "lab3");
        assert_eq!(cfg.user, "clerk");
        assert_eq!(cfg.password, "hunter2");
        assert_eq!(cfg.describe(), "clerk@db.internal:6543/lab3");
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = DbConfig::from_lookup(lookup_from(&[("MNHS_DB_PORT", "fifty")])).unwrap_err();
        assert!(matches!(err, MnhsError::Config { .. }));
    }

    #[test]
    fn blank_database_url_is_ignored() {
        let cfg = DbConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(cfg.url.is_none());
    }

    #[test]
    fn flag_url_overrides_env() {
        let cfg = DbConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://a/b")]))
            .unwrap()
            .with_url(Some("postgres://c/d".to_string()));
        assert_eq!(cfg.url.as_deref(), Some("postgres://c/d"));

        let kept = cfg.clone().with_url(None);
        assert_eq!(kept.url.as_deref(), Some("postgres://c/d"));
    }

    #[test]
    fn invalid_url_is_config_error() {
        let cfg = DbConfig::default().with_url(Some("not a url".to_string()));
        let err = cfg.connect_options().unwrap_err();
        assert!(matches!(err, MnhsError::Config { .. }));
    }

    #[test]
    fn debug_hides_password() {
        let cfg = DbConfig::default();
        let shown = format!("{:?}", cfg);
        assert!(!shown.contains(DEFAULT_PASSWORD));
        assert!(shown.contains("<redacted>"));
    }
}
