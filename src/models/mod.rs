//! Data models and DTOs (Data Transfer Objects)
//!
//! Listed records and create requests for each entity.

pub mod aircraft;
pub mod crew;
pub mod flight;

// Re-export commonly used types
pub use aircraft::*;
pub use crew::*;
pub use flight::*;

use serde::{Deserialize, Serialize};

/// Message-only response (no data)
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
