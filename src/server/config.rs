use std::net::{IpAddr, SocketAddr};

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is not set, created on first start
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db?mode=rwc";
pub static DEFAULT_HOST: &str = "0.0.0.0";
pub static DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from environment variables, falling back to defaults for unset values
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match std::env::var("PORT") {
            Ok(port) => parse_port(&port)?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url,
            host,
            port,
        })
    }

    /// Address the HTTP listener binds to
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "HOST".to_string(),
                reason: e.to_string(),
            })?;

        Ok(SocketAddr::from((ip, self.port)))
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|e| ConfigError::InvalidEnvValue {
        var: "PORT".to_string(),
        reason: e.to_string(),
    })
}
