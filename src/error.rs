//! Error handling module
//!
//! Every failure a handler can hit is turned into an error envelope here.
//! Nothing in a request path is allowed to take the process down.

use crate::models::Envelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Pool(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Pool(e) => {
                error!("Pool error: {:?}", e);
                "Database is unavailable".to_string()
            }
            AppError::Config(msg) => {
                error!("Configuration error: {}", msg);
                "A configuration error occurred".to_string()
            }
            AppError::Validation(msg) => msg,
            AppError::BadRequest(msg) => {
                warn!("Rejected request: {}", msg);
                msg
            }
        };

        (status, Json(Envelope::error(message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;

/// Helper function to create a validation error
pub fn validation_error(msg: impl Into<String>) -> AppError {
    AppError::Validation(msg.into())
}
