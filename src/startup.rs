//! Router assembly and server lifecycle.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

use std::{net::SocketAddr, time::Duration};

use crate::{config::Config, handlers, listener::IdleTimeoutListener};

/// Builds the HTTP router with the limits from `config` applied.
pub fn build_router(config: &Config) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/notify", post(handlers::notify))
        .route("/api-doc/openapi.json", get(handlers::openapi))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(RequestBodyTimeoutLayer::new(config.read_timeout))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.write_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

/// A bound listener plus the router it will serve.
pub struct Application {
    port: u16,
    listener: TcpListener,
    idle_timeout: Duration,
    router: Router,
}

impl Application {
    /// Binds `0.0.0.0:{config.port}`. Port `0` picks a free port.
    pub async fn build(config: &Config) -> std::io::Result<Self> {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            e
        })?;
        let port = listener
            .local_addr()
            .map_err(|e| {
                tracing::error!("Failed to read bound address of listener: {}", e);
                e
            })?
            .port();

        Ok(Self {
            port,
            listener,
            idle_timeout: config.idle_timeout,
            router: build_router(config),
        })
    }

    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Serves requests until Ctrl-C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(
            "Notification service starting, listening on 0.0.0.0:{}",
            self.port
        );

        let listener = IdleTimeoutListener::new(self.listener, self.idle_timeout);
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
