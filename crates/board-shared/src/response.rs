//! Error body returned for every handled failure.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}` - the only error shape clients ever see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error.")
    }
}
