use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus::{Encoder, Registry, TextEncoder};
use tokio::net::ToSocketAddrs;

use crate::error::{Error, Result};

const BANNER: &str = "Container's pids exporter.\nPlease visit /metrics !!";

async fn index() -> &'static str {
    BANNER
}

async fn metrics(State(registry): State<Registry>) -> Response {
    // Collection reads the cgroup filesystem synchronously.
    let families = match tokio::task::spawn_blocking(move || registry.gather()).await {
        Ok(families) => families,
        Err(err) => {
            log::error!("Metrics collection panicked: {}", err);
            return (StatusCode::INTERNAL_SERVER_ERROR, "failed to collect metrics")
                .into_response();
        }
    };

    let encoder = TextEncoder::new();
    let mut body = Vec::new();
    if let Err(err) = encoder.encode(&families, &mut body) {
        log::error!("Failed to encode metrics: {}", err);
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response();
    }

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, encoder.format_type().to_owned())],
        body,
    )
        .into_response()
}

pub struct APIServer {
    router: axum::Router,
}

impl APIServer {
    pub fn new(registry: Registry) -> Self {
        let router = axum::Router::new()
            .route("/", get(index))
            .route("/metrics", get(metrics))
            .with_state(registry);
        Self { router }
    }

    /// Serves the exporter until interrupted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bind`] if the listener cannot be bound and
    /// [`Error::Serve`] if the server stops with an I/O error.
    pub async fn listen(self, addr: impl ToSocketAddrs + std::fmt::Display) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::Bind {
                addr: addr.to_string(),
                source,
            })?;
        log::info!("Listening on {}", addr);
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(Error::Serve)
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => log::info!("Received interrupt, shutting down"),
        Err(err) => {
            log::error!("Failed to listen for interrupt signal: {}", err);
            std::future::pending::<()>().await
        }
    }
}
