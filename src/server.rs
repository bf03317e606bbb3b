//! Service construction and socket binding.
//!
//! [`build_service`] has no side effects; only [`serve`] and [`start`] bind a
//! socket, and only the binary entry point calls [`serve`].

use std::net::SocketAddr;

use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::Result;
use crate::utils::shutdown_signal;

/// Build the router from resolved configuration.
pub fn build_service(config: &Config, metrics: Option<PrometheusHandle>) -> Router {
    let mut state = AppState::from_config(config);
    if let Some(handle) = metrics {
        state = state.with_metrics(handle);
    }
    create_router(state, config.static_dir.as_deref())
}

/// Bind the configured address and serve until SIGINT/SIGTERM.
pub async fn serve(router: Router, config: &Config) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();

    info!(%addr, environment = config.environment(), "Server running on port {}", port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Handle to control a server started with [`start`].
pub struct ServerHandle {
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
    addr: SocketAddr,
}

impl ServerHandle {
    /// Get the port the server is running on
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Get the bound socket address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Shutdown the server gracefully and wait for it to drain
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.task.await {
            warn!(error = %e, "Server task ended abnormally");
        }
    }
}

/// Bind `addr` and serve on a background task.
pub async fn start(router: Router, addr: SocketAddr) -> Result<ServerHandle> {
    let listener = TcpListener::bind(addr).await?;
    let addr = listener.local_addr()?;

    info!("Server listening on http://{}", addr);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Shutting down server...");
            })
            .await;
        if let Err(e) = result {
            warn!(error = %e, "Server exited with error");
        }
    });

    Ok(ServerHandle {
        shutdown_tx,
        task,
        addr,
    })
}
