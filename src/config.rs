use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_BASE_URL: &str = "https://booking-com.p.rapidapi.com/v1";
pub const DEFAULT_API_HOST: &str = "booking-com.p.rapidapi.com";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

// Provider client configuration, built once and passed to the client
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub base_url: String,
    pub api_key: String,
    pub api_host: String,
    pub timeout_ms: u64,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            api_host: DEFAULT_API_HOST.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    // Split out so tests don't have to touch the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("RAPID_API_KEY")
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingVar("RAPID_API_KEY".to_string()))?;

        let mut config = Self::new(api_key);

        if let Some(host) = lookup("RAPID_API_HOST") {
            config.api_host = host;
        }
        if let Some(base_url) = lookup("RAPID_API_BASE_URL") {
            config.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(timeout) = lookup("PROVIDER_TIMEOUT_MS") {
            config.timeout_ms = match timeout.parse::<u64>() {
                Ok(ms) if ms > 0 => ms,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "PROVIDER_TIMEOUT_MS".to_string(),
                        value: timeout,
                    })
                }
            };
        }

        Ok(config)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
            name: "BIND_ADDR".to_string(),
            value: raw.clone(),
        })?;
        Ok(Self { bind_addr })
    }
}
