//! Runtime configuration, read from the environment.
//!
//! - `RENTAL_BIND_ADDR`: socket address to listen on (default `0.0.0.0:8080`)
//! - `RENTAL_FLEET_FILES`: comma-separated JSON fleet files; unset means the
//!   built-in demo fleets

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub fleet_files: Vec<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(
            std::env::var("RENTAL_BIND_ADDR").ok(),
            std::env::var("RENTAL_FLEET_FILES").ok(),
        )
    }

    pub fn from_vars(bind_addr: Option<String>, fleet_files: Option<String>) -> anyhow::Result<Self> {
        let bind_addr = bind_addr.unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("RENTAL_BIND_ADDR is not a socket address: {bind_addr}"))?;

        let fleet_files = fleet_files
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .collect();

        Ok(Self {
            bind_addr,
            fleet_files,
        })
    }
}
