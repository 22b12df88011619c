//! Custom error types for budgetbook
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for budgetbook operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// The backing file (or its rewrite temp file) could not be opened
    #[error("File unavailable: {0}")]
    FileUnavailable(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for record fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// The ledger holds (or a file would load) more records than allowed
    #[error("Ledger capacity of {limit} transactions exceeded")]
    CapacityExceeded { limit: usize },

    /// A record id outside [1, count]
    #[error("No transaction with id {id} (ledger holds {count})")]
    IndexOutOfRange { id: usize, count: usize },
}

impl BudgetError {
    /// Check if this is a capacity error
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Check if this is an out-of-range id error
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budgetbook operations
pub type BudgetResult<T> = Result<T, BudgetError>;
