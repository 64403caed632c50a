//! Movies API
//!
//! A small REST service over a single PostgreSQL `movies` table: list, create,
//! delete one and delete all. Every request borrows a pooled connection for
//! exactly one statement and answers with a JSON envelope.

mod config;
mod db;
mod error;
mod extractors;
mod models;
mod routes;
mod state;

#[cfg(test)]
mod tests;

use crate::config::Settings;
use crate::db::PgMovieRepository;
use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("🚀 Starting Movies API...");

    let settings = Settings::load().map_err(|e| {
        error!("❌ Invalid configuration: {}", e);
        e
    })?;
    info!("📋 Configuration loaded successfully");

    let pool = db::connect(&settings.database).await.map_err(|e| {
        error!("❌ Failed to initialize database pool: {}", e);
        e
    })?;
    info!("✅ Database pool created successfully");

    let state = Arc::new(AppState::new(Arc::new(PgMovieRepository::new(pool))));
    let app = create_router(state, &settings);

    let addr = SocketAddr::from((settings.server.host, settings.server.port));

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📚 API Endpoints:");
    info!("   GET    /health            - Liveness check");
    info!("   GET    /movies/           - List all movies");
    info!("   POST   /movies/           - Create a movie (form: movieid, moviename)");
    info!("   DELETE /movies/{{movieID}}  - Delete a movie by id");
    info!("   DELETE /movies/           - Delete all movies");
    info!("");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");
    Ok(())
}

/// Initialize tracing with structured logging
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,movies_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
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
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("📴 Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            info!("📴 Received terminate signal, initiating graceful shutdown...");
        },
    }
}
