use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {reason}")]
    Invalid { key: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMode {
    Local,
    Remote,
}

impl FromStr for ProfileMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(ProfileMode::Local),
            "remote" => Ok(ProfileMode::Remote),
            other => Err(format!("expected local or remote, got {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub api_timeout: Duration,
    pub profile_mode: ProfileMode,
    pub http_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Missing keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = load(&lookup, "SALON_API_BASE_URL", "http://localhost:8080".to_string())?;
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "SALON_API_BASE_URL".into(),
                reason: "must start with http:// or https://".into(),
            });
        }
        let timeout_secs: u64 = load(&lookup, "SALON_API_TIMEOUT_SECS", 30)?;
        Ok(Self {
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            profile_mode: load(&lookup, "SALON_PROFILE_MODE", ProfileMode::Local)?,
            http_addr: load(&lookup, "SALON_HTTP_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
        })
    }
}

fn load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key: key.to_string(),
            reason: e.to_string(),
        }),
    }
}
