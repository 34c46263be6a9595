//! Common types and utilities for the matching engine
//!
//! Shared wire DTOs, error types and the exact-decimal helper used by the
//! `matching-engine` crate.

pub mod decimal;
pub mod error;
pub mod types;

pub use decimal::Decimal;
pub use error::EngineError;
pub use types::*;
