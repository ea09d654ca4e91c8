//! Crate-level error taxonomy

use crate::config::ConfigError;
use crate::llm::LlmError;
use thiserror::Error;

/// Errors surfaced to the caller of a core operation. None are fatal; the
/// session stays usable after any of them.
#[derive(Debug, Error)]
pub enum FoodBridgeError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Assistant is still answering the previous message")]
    AssistantBusy,
    #[error("Assistant unavailable: {0}")]
    Upstream(#[from] LlmError),
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, FoodBridgeError>;
