//! Expense model
//!
//! A recurring monthly expense owned by the ledger. A zero amount marks a
//! pending entry added from a suggestion bubble; it still counts toward
//! totals (contributing nothing) until the user edits it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::group::ExpenseGroup;
use super::ids::ExpenseId;
use super::money::Money;

/// Icon used for expenses that do not match the taxonomy
pub const DEFAULT_ICON: &str = "cash";

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount,
    AmountTooLarge,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Expense name too long ({} chars, max {})", len, Expense::MAX_NAME_LEN)
            }
            Self::NegativeAmount => write!(f, "Expense amount cannot be negative"),
            Self::AmountTooLarge => write!(f, "Expense amount cannot exceed {}", Money::MAX),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    #[serde(default)]
    pub category: ExpenseGroup,
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Creation order assigned by the ledger; higher is newer
    #[serde(default)]
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Expense {
    pub const MAX_NAME_LEN: usize = 80;

    /// Create a new expense. The ledger assigns `sequence` on insert.
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: ExpenseGroup,
        icon: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category,
            icon: icon.into(),
            sequence: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// A pending expense has not been given an amount yet
    pub fn is_pending(&self) -> bool {
        self.amount.is_zero()
    }

    /// Mark the expense as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        let len = name.chars().count();
        if len > Self::MAX_NAME_LEN {
            return Err(ExpenseValidationError::NameTooLong(len));
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount);
        }
        if self.amount.exceeds_limit() {
            return Err(ExpenseValidationError::AmountTooLarge);
        }
        Ok(())
    }
}
