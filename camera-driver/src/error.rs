//! Common error types for camera-driver.
//!
//! A single Error enum built with thiserror covers configuration, listener
//! setup, and socket I/O. Per-connection failures are logged where they occur
//! and never surface through this type.

use std::net::SocketAddr;
use thiserror::Error;

/// Main error type for camera-driver operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors from tokio or std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid environment configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The HTTP listener could not be set up on the requested address
    #[error("Failed to bind HTTP server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
