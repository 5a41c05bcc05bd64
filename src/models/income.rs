//! Monthly income model
//!
//! A single income figure for the current budgeting month. It is never
//! deleted, only overwritten.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::money::Money;

/// Validation errors for income
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
    AmountTooLarge,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income cannot be negative"),
            Self::AmountTooLarge => write!(f, "Income cannot exceed {}", Money::MAX),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Monthly income for the single budget profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Income {
    pub amount: Money,
    /// When the income was last set; `None` if it never was
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Income {
    /// Create an income record stamped with the current time
    pub fn new(amount: Money) -> Self {
        Self {
            amount,
            updated_at: Some(Utc::now()),
        }
    }

    /// Overwrite the amount
    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
        self.updated_at = Some(Utc::now());
    }

    /// Whether the income has ever been set explicitly
    pub fn is_set(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Validate the income
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.amount.exceeds_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }
        Ok(())
    }
}
