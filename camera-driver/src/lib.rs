//! HTTP control driver for a networked camera.
//!
//! The driver exposes two routes, one to start the camera and one to query
//! its status, over a deliberately small HTTP/1.1 server. Camera state lives
//! in a single lock-guarded store shared by every connection task.

pub mod api;
pub mod camera;
pub mod config;
pub mod error;
pub mod tracing;
