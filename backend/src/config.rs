//! # Runtime Configuration
//!
//! All settings come from environment variables:
//!
//! | Variable                  | Default                      |
//! |---------------------------|------------------------------|
//! | `PORT`                    | `5000`                       |
//! | `INVOICE_DESK_HOST`       | `0.0.0.0`                    |
//! | `INVOICE_DESK_DATA_DIR`   | current working directory    |
//! | `INVOICE_DESK_ASSETS_DIR` | the crate's bundled `static/` |

use anyhow::{Context, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Where settings, history, the first-run flag and generated PDFs live
    pub data_dir: PathBuf,
    /// Bundled static assets (scripts) served under `/static`
    pub assets_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT '{}'", value))?,
            None => DEFAULT_PORT,
        };

        let host = match get("INVOICE_DESK_HOST") {
            Some(value) => value
                .trim()
                .parse::<IpAddr>()
                .with_context(|| format!("Invalid INVOICE_DESK_HOST '{}'", value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let data_dir = match get("INVOICE_DESK_DATA_DIR") {
            Some(value) => PathBuf::from(value),
            None => std::env::current_dir().context("Failed to resolve the working directory")?,
        };

        let assets_dir = get("INVOICE_DESK_ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"));

        Ok(Self {
            host,
            port,
            data_dir,
            assets_dir,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
