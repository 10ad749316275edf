use anyhow::Context;
use tokio::signal::unix::{self, SignalKind};
use tokio_util::sync::CancellationToken;

use camera_driver::api::HttpServer;
use camera_driver::camera::CameraState;
use camera_driver::config::Config;
use camera_driver::tracing::{self, prelude::*};

#[tokio::main]
async fn main() {
    tracing::init_journald_or_stdout();

    if let Err(e) = run().await {
        error!("{e:#}");
        std::process::exit(1);
    }
    info!("Exiting.");
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    let addr = config.bind_addr()?;
    info!(
        host = %config.http_host,
        port = config.http_port,
        device = %config.device_ip,
        "Camera HTTP driver starting."
    );

    let server = HttpServer::bind(addr, CameraState::new())?;
    let mut sigint = unix::signal(SignalKind::interrupt()).context("installing SIGINT handler")?;
    let mut sigterm = unix::signal(SignalKind::terminate()).context("installing SIGTERM handler")?;

    let running = CancellationToken::new();
    let acceptor = tokio::spawn(server.serve(running.clone()));
    info!(%addr, "Started.");

    tokio::select! {
        _ = sigint.recv() => {},
        _ = sigterm.recv() => {},
    }

    trace!("Shutting down.");
    running.cancel();
    acceptor.await.context("accept loop panicked")?;
    Ok(())
}
