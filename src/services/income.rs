//! Income service
//!
//! Reads and overwrites the single monthly income figure.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Income, Money};
use crate::storage::Ledger;

/// Service for the monthly income
pub struct IncomeService<'a> {
    ledger: &'a Ledger,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Current income amount; zero if it was never set
    pub fn get_income(&self) -> BudgetResult<Money> {
        Ok(self.ledger.income()?.amount)
    }

    /// The full income record, including when it was last set
    pub fn get_income_record(&self) -> BudgetResult<Income> {
        self.ledger.income()
    }

    /// Overwrite the monthly income; negative or above `Money::MAX` is rejected
    pub fn set_income(&self, amount: Money) -> BudgetResult<Income> {
        let mut income = self.ledger.income()?;
        income.set_amount(amount);
        income
            .validate()
            .map_err(|e| BudgetError::InvalidAmount(e.to_string()))?;

        let income = self.ledger.set_income(income)?;
        tracing::info!(amount = %income.amount, "income updated");
        Ok(income)
    }

    /// Parse a typed amount and set it as the income
    pub fn set_income_from_str(&self, amount: &str) -> BudgetResult<Income> {
        self.set_income(Money::parse(amount)?)
    }
}
