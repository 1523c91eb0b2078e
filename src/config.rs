// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

/// How the façades decide whether to try the remote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RemoteMode {
    /// Never call out; everything is served from the in-memory store.
    #[default]
    Offline,
    /// Always try the remote API first.
    Online,
    /// Ask the health URL before each call.
    Probe,
}

impl RemoteMode {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "offline" => Ok(Self::Offline),
            "online" => Ok(Self::Online),
            "probe" => Ok(Self::Probe),
            other => Err(ConfigError::Invalid(format!(
                "REMOTE_API_MODE must be offline, online or probe (got {other:?})"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    remote_base_url: String,
    remote_timeout: Duration,
    remote_mode: RemoteMode,
    remote_health_url: String,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_remote_base_url() -> String {
    "https://test-fe.mysellerpintar.com/api".into()
}

fn default_remote_timeout_ms() -> u64 {
    5000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Every key is optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`from_env`](Self::from_env) over an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let non_empty = |key| lookup(key).filter(|value| !value.trim().is_empty());

        let listen_addr = non_empty("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let remote_base_url = non_empty("REMOTE_API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(default_remote_base_url);
        if !remote_base_url.starts_with("http://") && !remote_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "REMOTE_API_BASE_URL must be an http(s) URL (got {remote_base_url:?})"
            )));
        }

        let timeout_ms = match non_empty("REMOTE_API_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "REMOTE_API_TIMEOUT_MS must be a positive integer (got {raw:?})"
                    ))
                })?,
            None => default_remote_timeout_ms(),
        };

        let remote_mode = match non_empty("REMOTE_API_MODE") {
            Some(raw) => RemoteMode::parse(&raw)?,
            None => RemoteMode::default(),
        };

        let remote_health_url = non_empty("REMOTE_API_HEALTH_URL")
            .unwrap_or_else(|| format!("{remote_base_url}/articles"));

        let allowed_origins = non_empty("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            listen_addr,
            remote_base_url,
            remote_timeout: Duration::from_millis(timeout_ms),
            remote_mode,
            remote_health_url,
            allowed_origins,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn remote_base_url(&self) -> &str {
        &self.remote_base_url
    }

    pub fn remote_timeout(&self) -> Duration {
        self.remote_timeout
    }

    pub fn remote_mode(&self) -> RemoteMode {
        self.remote_mode
    }

    pub fn remote_health_url(&self) -> &str {
        &self.remote_health_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&'static str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<&str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        assert_eq!(config.remote_mode(), RemoteMode::Offline);
        assert_eq!(config.remote_timeout(), Duration::from_millis(5000));
        assert_eq!(
            config.remote_health_url(),
            "https://test-fe.mysellerpintar.com/api/articles"
        );
        assert_eq!(config.allowed_origins(), ["http://localhost:3000"]);
    }

    #[test]
    fn trailing_slash_is_trimmed_from_base_url() {
        let config = config(&[("REMOTE_API_BASE_URL", "http://localhost:9000/api/")]).unwrap();
        assert_eq!(config.remote_base_url(), "http://localhost:9000/api");
        assert_eq!(config.remote_health_url(), "http://localhost:9000/api/articles");
    }

    #[test]
    fn mode_is_case_insensitive() {
        let config = config(&[("REMOTE_API_MODE", "Probe")]).unwrap();
        assert_eq!(config.remote_mode(), RemoteMode::Probe);
    }

    #[test]
    fn rejects_zero_timeout_and_unknown_mode() {
        assert!(matches!(
            config(&[("REMOTE_API_TIMEOUT_MS", "0")]),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            config(&[("REMOTE_API_MODE", "sometimes")]),
            Err(ConfigError::Invalid(_))
        ));
    }
}
