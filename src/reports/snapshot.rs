//! Budget snapshot
//!
//! Derived totals, percentages and status for an (income, expenses) pair.
//! A snapshot is never stored; it is recomputed from the ledger on every
//! read, and computing one cannot fail.

use serde::Serialize;
use std::fmt;

use crate::models::{Expense, Money};

/// Overall health of the budget, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetStatus {
    /// Spending exceeds income
    Deficit,
    /// Less than 10% of income remains
    LowSavings,
    /// More than 50% of income remains
    Surplus,
    OnTrack,
}

impl BudgetStatus {
    /// Classify a remaining balance against income
    pub fn classify(income: Money, remaining: Money) -> Self {
        let income = i128::from(income.cents());
        let remaining = i128::from(remaining.cents());

        if remaining < 0 {
            Self::Deficit
        } else if remaining * 10 < income {
            Self::LowSavings
        } else if remaining * 2 > income {
            Self::Surplus
        } else {
            Self::OnTrack
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Deficit => "Deficit",
            Self::LowSavings => "Low savings",
            Self::Surplus => "Surplus",
            Self::OnTrack => "On track",
        };
        write!(f, "{}", label)
    }
}

/// The clamped two-segment split used by the budget bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Proportion {
    pub expense_share: f64,
    pub remaining_share: f64,
}

/// Derived financial summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSnapshot {
    pub income: Money,
    pub total_expenses: Money,
    /// Negative when overspent
    pub remaining: Money,
    /// Unclamped; 0 when income is zero
    pub expense_percentage: f64,
    /// Unclamped and signed; 0 when income is zero
    pub remaining_percentage: f64,
    pub status: BudgetStatus,
    pub expense_count: usize,
}

impl BudgetSnapshot {
    /// Compute a snapshot from income and the current expenses
    pub fn compute(income: Money, expenses: &[Expense]) -> Self {
        let total_expenses: Money = expenses.iter().map(|e| e.amount).sum();
        let remaining = income - total_expenses;

        Self {
            income,
            total_expenses,
            remaining,
            expense_percentage: total_expenses.percent_of(income),
            remaining_percentage: remaining.percent_of(income),
            status: BudgetStatus::classify(income, remaining),
            expense_count: expenses.len(),
        }
    }

    /// Whether there is money left over (take-home pay is not negative)
    pub fn is_positive(&self) -> bool {
        !self.remaining.is_negative()
    }

    /// Expense and remaining shares for display.
    ///
    /// Each share lies in [0, 100] and the pair never sums past 100; when
    /// spending exceeds income the remaining share absorbs the overflow.
    pub fn proportion(&self) -> Proportion {
        let expense_share = self.expense_percentage.clamp(0.0, 100.0);
        let remaining_share = self
            .remaining_percentage
            .clamp(0.0, 100.0 - expense_share);

        Proportion {
            expense_share,
            remaining_share,
        }
    }
}
