//! Request routing.

use hyper::{Method, StatusCode};

use super::http::{RequestLine, Response};
use super::json;
use crate::camera::CameraState;
use crate::tracing::prelude::*;

pub const START_PATH: &str = "/camera/start";
pub const STATUS_PATH: &str = "/camera/status";

/// Map a request line to a response.
///
/// Only `POST /camera/start` and `GET /camera/status` are recognized, by
/// exact match. Query strings are not stripped, so `/camera/status?x=1` is
/// not found.
pub fn route(request: &RequestLine, camera: &CameraState) -> Response {
    let method = Method::from_bytes(request.method.as_bytes()).ok();

    match (method, request.path.as_str()) {
        (Some(m), START_PATH) if m == Method::POST => start_camera(camera),
        (Some(m), STATUS_PATH) if m == Method::GET => camera_status(camera),
        _ => not_found(),
    }
}

fn start_camera(camera: &CameraState) -> Response {
    let body = match camera.start() {
        Ok(()) => json::object([("success", "true"), ("message", "Camera started")]),
        Err(e) => {
            warn!(error = %e, "Failed to start camera");
            json::object([("success", "false"), ("message", "Failed to start camera")])
        }
    };
    Response::new(StatusCode::OK, body)
}

fn camera_status(camera: &CameraState) -> Response {
    let snapshot = camera.status();
    let body = json::object([
        ("status", snapshot.status.as_ref()),
        ("error", snapshot.last_error.as_str()),
    ]);
    Response::new(StatusCode::OK, body)
}

fn not_found() -> Response {
    Response::new(StatusCode::NOT_FOUND, json::object([("error", "Not Found")]))
}
