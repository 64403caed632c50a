//! Database connection management
//!
//! Builds the connection pool every request borrows its handle from.

pub mod queries;
pub mod service;

pub use service::{MovieRepository, PgMovieRepository};

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;
use tracing::info;

/// Create a connection pool and check that the database answers
pub async fn connect(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let pool = create_pool(config)?;

    let client = pool.get().await?;
    client.query_one(queries::PING, &[]).await?;
    drop(client);

    info!(
        "Connection pool established ({}@{}:{}/{}, max {} connections)",
        config.user, config.host, config.port, config.database, config.max_pool_size
    );

    Ok(pool)
}

/// Create a connection pool with given configuration
///
/// Connections are opened lazily; SSL is always disabled.
pub fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
}
