//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `RIDDLE_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;

use axum::http::HeaderValue;

use crate::constants::{DEFAULT_MODEL_ID, DEFAULT_MODEL_REVISION, DEFAULT_PORT};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `RIDDLE_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8000`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Hugging Face model id used when no local path is set.
    pub model_id: String,

    /// Hub revision (branch, tag or commit). Default: `main`.
    pub model_revision: String,

    /// Local model directory (`config.json`, `model.safetensors`, `tokenizer.json`).
    pub model_path: Option<PathBuf>,

    /// CORS allow-list. Empty means any origin.
    pub allowed_origins: Vec<String>,

    /// Serve with the deterministic stub embedder instead of a real model.
    pub embedder_stub: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            model_id: DEFAULT_MODEL_ID.to_string(),
            model_revision: DEFAULT_MODEL_REVISION.to_string(),
            model_path: None,
            allowed_origins: Vec::new(),
            embedder_stub: false,
        }
    }
}

impl Config {
    /// Env var for the HTTP port.
    const ENV_PORT: &'static str = "RIDDLE_PORT";
    const ENV_BIND_ADDR: &'static str = "RIDDLE_BIND_ADDR";
    const ENV_MODEL_ID: &'static str = "RIDDLE_MODEL_ID";
    const ENV_MODEL_REVISION: &'static str = "RIDDLE_MODEL_REVISION";
    const ENV_MODEL_PATH: &'static str = "RIDDLE_MODEL_PATH";
    const ENV_ALLOWED_ORIGINS: &'static str = "RIDDLE_ALLOWED_ORIGINS";
    const ENV_EMBEDDER_STUB: &'static str = "RIDDLE_EMBEDDER_STUB";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let model_id = Self::parse_string_from_env(Self::ENV_MODEL_ID, defaults.model_id);
        let model_revision =
            Self::parse_string_from_env(Self::ENV_MODEL_REVISION, defaults.model_revision);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let allowed_origins = Self::parse_list_from_env(Self::ENV_ALLOWED_ORIGINS);
        let embedder_stub = Self::parse_flag_from_env(Self::ENV_EMBEDDER_STUB);

        Ok(Self {
            port,
            bind_addr,
            model_id,
            model_revision,
            model_path,
            allowed_origins,
            embedder_stub,
        })
    }

    /// Validates paths and basic invariants (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        } else if self.model_id.trim().is_empty() && !self.embedder_stub {
            return Err(ConfigError::MissingModel);
        }

        for origin in &self.allowed_origins {
            let has_scheme = origin.starts_with("http://") || origin.starts_with("https://");
            if !has_scheme || HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidOrigin {
                    value: origin.clone(),
                });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        match self.bind_addr {
            IpAddr::V4(addr) => format!("{}:{}", addr, self.port),
            IpAddr::V6(addr) => format!("[{}]:{}", addr, self.port),
        }
    }

    /// Returns the `/healthz` URL for `--health-check`.
    ///
    /// Wildcard binds (`0.0.0.0`, `::`) are checked on loopback.
    pub fn health_check_url(&self) -> String {
        let host = match self.bind_addr {
            IpAddr::V4(addr) if addr.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
            IpAddr::V6(addr) if addr.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
            addr => addr,
        };
        format!("http://{}/healthz", SocketAddr::new(host, self.port))
    }

    /// Returns `true` when CORS accepts any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_list_from_env(var_name: &str) -> Vec<String> {
        env::var(var_name)
            .map(|v| {
                v.split(',')
                    .map(|item| item.trim().trim_end_matches('/').to_string())
                    .filter(|item| !item.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parse_flag_from_env(var_name: &str) -> bool {
        env::var(var_name)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }
}
