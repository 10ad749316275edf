//! Listener, accept loop, and per-connection handling.
//!
//! The acceptor owns the listening socket and hands each accepted stream to
//! its own detached task. It never waits on, tracks, or limits those tasks.
//! A connection is served exactly once: one read, one response, close.

use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpSocket, TcpStream};
use tokio_util::sync::CancellationToken;

use super::http::{RequestLine, READ_BUFFER_SIZE};
use super::router;
use crate::camera::CameraState;
use crate::error::{Error, Result};
use crate::tracing::prelude::*;

/// Pending-connection backlog for the listening socket.
pub const LISTEN_BACKLOG: u32 = 8;

/// HTTP control server bound to a listening socket.
pub struct HttpServer {
    listener: TcpListener,
    camera: CameraState,
}

impl HttpServer {
    /// Bind the listening socket with address reuse enabled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn bind(addr: SocketAddr, camera: CameraState) -> Result<Self> {
        let bind_err = |source| Error::Bind { addr, source };

        let socket = if addr.is_ipv4() {
            TcpSocket::new_v4()
        } else {
            TcpSocket::new_v6()
        }
        .map_err(bind_err)?;
        socket.set_reuseaddr(true).map_err(bind_err)?;
        socket.bind(addr).map_err(bind_err)?;
        let listener = socket.listen(LISTEN_BACKLOG).map_err(bind_err)?;

        Ok(Self { listener, camera })
    }

    /// Address actually bound, useful when binding port 0.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections until `running` is cancelled.
    ///
    /// Accept failures are logged and the loop carries on. Handlers still in
    /// flight when the loop exits are left to finish on their own.
    pub async fn serve(self, running: CancellationToken) {
        trace!("Accept loop started.");

        loop {
            tokio::select! {
                _ = running.cancelled() => break,
                accepted = self.listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        trace!(%peer, "Accepted connection.");
                        tokio::spawn(handle_connection(stream, peer, self.camera.clone()));
                    }
                    Err(e) => {
                        warn!(error = %e, "Failed to accept connection.");
                    }
                },
            }
        }

        trace!("Accept loop stopped.");
    }
}

/// Serve a single request on `stream`, then close it.
///
/// Nothing here is returned to the caller; failures are contained to this
/// connection and logged.
pub async fn handle_connection(mut stream: TcpStream, peer: SocketAddr, camera: CameraState) {
    let mut buf = [0u8; READ_BUFFER_SIZE];
    let n = match stream.read(&mut buf).await {
        Ok(0) => {
            debug!(%peer, "Connection closed before sending a request.");
            return;
        }
        Ok(n) => n,
        Err(e) => {
            debug!(%peer, error = %e, "Failed to read request.");
            return;
        }
    };

    let request = RequestLine::parse(&buf[..n]);
    let response = router::route(&request, &camera);
    debug!(
        %peer,
        method = %request.method,
        path = %request.path,
        status = response.status.as_u16(),
        "Handled request"
    );

    if let Err(e) = stream.write_all(&response.to_bytes()).await {
        debug!(%peer, error = %e, "Failed to write response.");
        return;
    }
    if let Err(e) = stream.shutdown().await {
        trace!(%peer, error = %e, "Failed to shut down connection.");
    }
}
