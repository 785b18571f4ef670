//! Axum server setup
//!
//! Server skeleton with:
//! - CORS restricted to the configured origin list
//! - Tracing middleware
//! - Graceful shutdown on SIGTERM/Ctrl+C
//!
//! The ledger client is probed once here and then only carried in state.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::config::AppConfig;
use crate::ledger::LedgerClient;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:8001)
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8001)),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub pool: PgPool,
    pub config: AppConfig,
    /// Connected at startup, consulted by nothing in scope
    pub ledger: LedgerClient,
}

/// Build the application router with all routes nested under /api.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .nest("/api", routes::api_router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Run the HTTP server.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&database_url, 5).await?;
/// run_server(pool, AppConfig::from_env(), ServerConfig::default()).await?;
/// ```
pub async fn run_server(
    pool: PgPool,
    config: AppConfig,
    server: ServerConfig,
) -> Result<(), ServerError> {
    let ledger = LedgerClient::new(&config.ledger_rpc_url);
    match ledger.probe().await {
        Ok(health) => tracing::info!(rpc_url = %ledger.rpc_url(), %health, "Ledger RPC reachable"),
        Err(e) => tracing::warn!(rpc_url = %ledger.rpc_url(), "Ledger RPC probe failed: {}", e),
    }

    let state = Arc::new(AppState {
        pool,
        config,
        ledger,
    });
    let app = build_router(state);

    let listener = TcpListener::bind(server.bind_addr).await?;
    tracing::info!("Server listening on {}", server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
