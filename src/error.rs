//! Error types for Budget Buddy
//!
//! Every fallible operation in the crate returns [`BudgetResult`]. The three
//! kinds callers are expected to branch on are `InvalidAmount`, `NotFound`
//! and `Persistence`; the rest describe environment problems.

use thiserror::Error;

use crate::models::money::MoneyParseError;

/// The main error type for Budget Buddy operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Amount was non-numeric, negative, zero where a positive value is required, or non-finite
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// The durability layer could not commit or load the ledger
    #[error("Persistence failure: {0}")]
    Persistence(String),

    /// Malformed free-text input (empty names and the like)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors outside the ledger
    #[error("JSON error: {0}")]
    Json(String),
}

impl BudgetError {
    /// Create a "not found" error for expenses
    pub fn expense_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Expense",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for taxonomy entries
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Category",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if the durability layer failed
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}

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

impl From<MoneyParseError> for BudgetError {
    fn from(err: MoneyParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

/// Result type alias for Budget Buddy operations
pub type BudgetResult<T> = Result<T, BudgetError>;
