// src/config.rs
use std::{env, net::SocketAddr};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    listen_addr: SocketAddr,
    trace_scans: bool,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_log_filter() -> String {
    "info,tower_http=info".into()
}

impl AppConfig {
    /// Build configuration from environment variables, reading a `.env` file
    /// first when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `LISTEN_ADDR` is not a socket
    /// address or `TRACE_SCANS` is not a recognised boolean.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = match lookup("LISTEN_ADDR") {
            Some(raw) => raw.trim().parse::<SocketAddr>().map_err(|err| {
                ConfigError::Invalid(format!("LISTEN_ADDR '{raw}' is not a socket address: {err}"))
            })?,
            None => default_listen_addr(),
        };

        let trace_scans = match lookup("TRACE_SCANS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("TRACE_SCANS must be a boolean, got '{raw}'"))
            })?,
            None => false,
        };

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        Ok(Self {
            listen_addr,
            trace_scans,
            log_filter,
        })
    }

    #[must_use]
    pub const fn listen_addr(&self) -> SocketAddr {
        self.listen_addr
    }

    /// Whether scans emit per-character `TRACE` events.
    #[must_use]
    pub const fn trace_scans(&self) -> bool {
        self.trace_scans
    }

    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.listen_addr(), default_listen_addr());
        assert!(!cfg.trace_scans());
        assert_eq!(cfg.log_filter(), "info,tower_http=info");
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("LISTEN_ADDR", "0.0.0.0:9000"),
            ("TRACE_SCANS", "TRUE"),
            ("RUST_LOG", "account_gate=trace"),
        ])
        .unwrap();
        assert_eq!(cfg.listen_addr().port(), 9000);
        assert!(cfg.trace_scans());
        assert_eq!(cfg.log_filter(), "account_gate=trace");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config(&[("LISTEN_ADDR", "localhost")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("TRACE_SCANS", "sometimes")]),
            Err(ConfigError::Invalid(_))
        ));
    }
}
