//! Application state management
//!
//! Contains shared state accessible across all handlers. The database is the
//! only store; the state holds nothing but the handle to reach it.

use crate::db::MovieRepository;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Data access for the movies table
    pub movies: Arc<dyn MovieRepository>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
