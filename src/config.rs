//! Configuration for the standalone server.
//!
//! Everything comes from environment variables. The Lambda executables don't
//! need any of it.

use std::{env, net::IpAddr, net::SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    /// Read `HOST` and `PORT`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("HOST").ok(), env::var("PORT").ok())
    }

    fn from_values(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|source| ConfigError::InvalidAddress {
                name: "HOST",
                value: host.clone(),
                source,
            })?;

        let port = match port {
            Some(text) => text
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidNumber {
                    name: "PORT",
                    value: text.clone(),
                    source,
                })?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig { host, port })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}
