use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::num::ParseIntError;
use thiserror::Error;
use tracing::trace;

pub const DEFAULT_ASSETS_ROOT_DIR: &str = "./target/site";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub assets_root_dir: String,
    /// Overrides the leptos `site-addr` when set.
    pub site_addr: Option<SocketAddr>,
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let assets_root_dir =
            var("ASSETS_ROOT_DIR").unwrap_or_else(|| DEFAULT_ASSETS_ROOT_DIR.to_string());

        let site_addr = match var("SITE_ADDR") {
            Some(value) => Some(
                value
                    .parse::<SocketAddr>()
                    .map_err(|source| ConfigError::SiteAddr { value, source })?,
            ),
            None => None,
        };

        let workers = match var("SERVER_WORKERS") {
            Some(value) => {
                let workers = value
                    .parse::<usize>()
                    .map_err(|source| ConfigError::Workers { value, source })?;
                if workers == 0 {
                    return Err(ConfigError::ZeroWorkers);
                }
                Some(workers)
            }
            None => None,
        };

        let config = Self {
            assets_root_dir,
            site_addr,
            workers,
        };
        trace!("server config: {:?}", config);
        Ok(config)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("SITE_ADDR '{value}' is not a socket address: {source}")]
    SiteAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("SERVER_WORKERS '{value}' is not a number: {source}")]
    Workers {
        value: String,
        source: ParseIntError,
    },

    #[error("SERVER_WORKERS must be at least 1")]
    ZeroWorkers,
}
