//! HTTP request handler for product URL validation.
//!
//! Provides two endpoints:
//! - `POST /validate-product-urls` - validate and replace a batch of product URLs
//! - `GET /status` - JSON counters for every probe issued since startup
//!
//! The server binds to 127.0.0.1 and shuts down gracefully on Ctrl-C, letting
//! in-flight requests finish.

mod handlers;
mod types;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::app::{cancel_on_ctrl_c, print_error_statistics};
use crate::config::{ServeConfig, STATUS_ROUTE, VALIDATE_ROUTE};
use crate::error_handling::{InitializationError, ProcessingStats};
use crate::initialization::init_client;
use crate::probe::{HttpProber, Probe};

use handlers::{status_handler, validate_handler};
pub use types::AppState;

/// Builds the router over `state`.
pub fn router<P>(state: AppState<P>) -> Router
where
    P: Probe + Send + Sync + 'static,
{
    Router::new()
        .route(VALIDATE_ROUTE, post(validate_handler::<P>))
        .route(STATUS_ROUTE, get(status_handler::<P>))
        .with_state(state)
}

/// Binds a listener on 127.0.0.1:`port`. Port 0 picks a free port.
pub async fn bind(port: u16) -> Result<TcpListener, InitializationError> {
    TcpListener::bind(("127.0.0.1", port))
        .await
        .map_err(|source| InitializationError::ServerBindError { port, source })
}

/// Serves `state` on `listener` until `shutdown` is cancelled.
pub async fn serve<P>(listener: TcpListener, state: AppState<P>, shutdown: CancellationToken) -> Result<()>
where
    P: Probe + Send + Sync + 'static,
{
    let stats = Arc::clone(&state.stats);
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{addr}/");
        info!("  - Validate: POST http://{addr}{VALIDATE_ROUTE}");
        info!("  - Status: GET http://{addr}{STATUS_ROUTE}");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
        .context("Server error")?;

    info!("Server stopped");
    print_error_statistics(&stats);
    Ok(())
}

/// Starts the server with a fresh HTTP client and runs until Ctrl-C.
pub async fn start_server(config: ServeConfig) -> Result<()> {
    let client = init_client(&config.user_agent).map_err(InitializationError::from)?;
    let stats = Arc::new(ProcessingStats::new());
    let prober = Arc::new(HttpProber::new(client).with_stats(Arc::clone(&stats)));
    let state = AppState::new(prober, stats, config.timeout());

    let listener = bind(config.port).await?;

    serve(listener, state, cancel_on_ctrl_c()).await
}
