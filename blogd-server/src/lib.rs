//! blogd-server: HTTP API for a small blogging domain
//!
//! Users, posts, comments, and likes over SQLite, each request flowing
//! through the same pipeline: validate input, call the matching repository,
//! map the outcome to an HTTP response.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use http::error::ApiError;
pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://blogd.db?mode=rwc".to_string()),
        }
    }
}

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/users", http::routes::users::router())
        .nest("/api/posts", http::routes::posts::router())
        .nest("/api/comments", http::routes::comments::router())
        .nest("/api/likes", http::routes::likes::router())
        .merge(http::routes::health::router())
        .fallback(http::routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid bind address: {0}")]
    Addr(#[from] std::net::AddrParseError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Start the HTTP server.
///
/// Opens the connection pool, runs migrations, serves until Ctrl+C or
/// SIGTERM, then closes the pool.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let pool = db::create_pool(&config.database_url).await?;
    db::migrations::run(&pool).await?;

    let state = AppState::new(pool.clone());
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
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
