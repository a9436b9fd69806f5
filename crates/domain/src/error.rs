//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing callers to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., duplicate ids in a catalog)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Invalid identifier (zero, negative, out of range, unparseable)
    #[error("Invalid id: {0}")]
    InvalidId(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates an invalid id error.
    ///
    /// Use this wherever a raw value fails to become a [`crate::ScenarioId`]:
    /// zero or negative input, values past `u32::MAX`, or strings that do
    /// not parse as integers.
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
