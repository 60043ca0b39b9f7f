//! Error types for the engine's outer surface

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// The upstream model did not return a JSON array of strings
    #[error("invalid clause list: {0}")]
    InvalidClauseList(#[from] serde_json::Error),
}
