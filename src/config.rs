//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::store::IdStrategy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// How new post ids are chosen
    pub id_strategy: IdStrategy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// `main` loads a `.env` file first, so any of these may come from there.
    ///
    /// # Environment Variables
    /// - `PORT` (or `port`) - HTTP server port (default: 3000)
    /// - `HOST` - Bind address (default: 0.0.0.0)
    /// - `ID_STRATEGY` - `length` or `monotonic` (default: length)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.host),
            server_port: env::var("PORT")
                .or_else(|_| env::var("port"))
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            id_strategy: env::var("ID_STRATEGY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.id_strategy),
        }
    }

    /// Socket address built from `host` and `server_port`.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.server_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 3000,
            id_strategy: IdStrategy::Length,
        }
    }
}
