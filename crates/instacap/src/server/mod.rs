//! HTTP API.
//!
//! The router is built once at startup from a `PostFetcher` and handed to
//! `serve`; nothing about it changes afterwards.

pub mod handlers;
pub mod types;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tokio::net::{TcpListener, ToSocketAddrs};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::instagram::PostFetcher;
use handlers::{extract_handler, extract_simple_handler, health_handler};

/// Shared state for the handlers.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: PostFetcher,
}

/// Build the API router.
///
/// - `GET /health`
/// - `POST /extract`
/// - `GET /extract-simple?url=...`
///
/// Request bodies are unbounded so an oversized `POST /extract` still gets a
/// JSON answer instead of a plain-text 413.
pub fn build_router(fetcher: PostFetcher) -> Router {
    let state = AppState { fetcher };

    Router::new()
        .route("/health", get(health_handler))
        .route("/extract", post(extract_handler))
        .route("/extract-simple", get(extract_simple_handler))
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Bind `addr` and serve `router` until Ctrl-C / SIGTERM.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve(addr: impl ToSocketAddrs, router: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;

    log::info!("Starting Instagram caption API on http://{}", listener.local_addr()?);
    log::info!("  GET  /health          - Health check");
    log::info!("  POST /extract         - Extract post metadata (JSON body)");
    log::info!("  GET  /extract-simple  - Extract post metadata (query param)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("Shutdown signal received, draining connections");
}
