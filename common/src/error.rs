//! Error types for the matching engine
//!
//! One error kind per row of the engine's error taxonomy: anything here
//! fails the whole run rather than being retried, since each variant
//! indicates a programmer or data error, not a transient condition.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    #[error("malformed command: {0}")]
    MalformedCommand(#[from] serde_json::Error),

    #[error("duplicate order id: {0}")]
    DuplicateOrderId(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
