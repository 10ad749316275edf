//! Configuration management for camera-driver.
//!
//! Configuration comes from environment variables read once at startup.
//! Any invalid value is a fatal [`Error::Config`].

use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use crate::error::{Error, Result};

pub const DEVICE_IP_VAR: &str = "DEVICE_IP";
pub const HTTP_HOST_VAR: &str = "HTTP_HOST";
pub const HTTP_PORT_VAR: &str = "HTTP_PORT";

const DEFAULT_DEVICE_IP: &str = "127.0.0.1";
const DEFAULT_HTTP_HOST: &str = "0.0.0.0";
const DEFAULT_HTTP_PORT: u16 = 8080;

/// Runtime configuration for the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address of the physical camera.
    ///
    /// Reserved for the device link; the simulated camera never dials it.
    pub device_ip: String,

    /// Bind address for the HTTP server, `0.0.0.0` for all interfaces
    pub http_host: String,

    /// Bind port for the HTTP server
    pub http_port: u16,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let device_ip = lookup(DEVICE_IP_VAR).unwrap_or_else(|| DEFAULT_DEVICE_IP.to_string());
        let http_host = lookup(HTTP_HOST_VAR).unwrap_or_else(|| DEFAULT_HTTP_HOST.to_string());
        let http_port = match lookup(HTTP_PORT_VAR) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                Error::Config(format!("{HTTP_PORT_VAR}={raw:?} is not a valid port: {e}"))
            })?,
            None => DEFAULT_HTTP_PORT,
        };

        let config = Self {
            device_ip,
            http_host,
            http_port,
        };
        // Reject a bad host now rather than at bind time.
        config.bind_addr()?;
        Ok(config)
    }

    /// Socket address the HTTP listener binds.
    ///
    /// `0.0.0.0` means every interface; anything else must be an IPv4
    /// literal naming one local address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip = if self.http_host == DEFAULT_HTTP_HOST {
            Ipv4Addr::UNSPECIFIED
        } else {
            self.http_host.parse::<Ipv4Addr>().map_err(|e| {
                Error::Config(format!(
                    "{HTTP_HOST_VAR}={:?} is not an IPv4 address: {e}",
                    self.http_host
                ))
            })?
        };
        Ok(SocketAddr::from((ip, self.http_port)))
    }
}
