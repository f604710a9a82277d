//! Application state management
//!
//! Contains shared state accessible across all handlers. Nothing here is
//! mutable; each request reaches the database on its own connection.

use crate::repository::SharedRepository;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Flights, aircraft and crew operations
    pub repository: SharedRepository,
}

impl AppState {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;
