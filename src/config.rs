use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use crate::database::activity_directory::CapacityPolicy;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("cannot read seed catalog {path}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid seed catalog: {0}")]
    SeedFormat(#[from] serde_json::Error),

    #[error("duplicate activity in seed catalog: {0}")]
    DuplicateActivity(String),

    #[error("activity {0} must allow at least one participant")]
    ZeroCapacity(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    /// Alternative seed catalog; the built-in one is used when unset.
    pub seed_path: Option<PathBuf>,
    pub capacity_policy: CapacityPolicy,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: raw,
            })?,
            None => 8000,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("static"));

        let seed_path = lookup("ACTIVITIES_SEED")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let capacity_policy = if lookup("ENFORCE_CAPACITY").as_deref().is_some_and(is_truthy) {
            CapacityPolicy::Enforced
        } else {
            CapacityPolicy::Advisory
        };

        Ok(Self {
            host,
            port,
            static_dir,
            seed_path,
            capacity_policy,
        })
    }

    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            key: "HOST",
            value: raw,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
