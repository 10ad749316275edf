//! HTTP control surface.
//!
//! A minimal HTTP/1.1 server with two fixed routes. Only the request line is
//! read; headers and bodies are ignored and every connection is closed after
//! a single response.

pub mod http;
pub mod json;
pub mod router;
pub mod server;

pub use router::route;
pub use server::HttpServer;
