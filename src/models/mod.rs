//! Core data models for Budget Buddy
//!
//! Income, expenses, the spending groups they belong to, and the money type
//! everything is measured in.

pub mod expense;
pub mod group;
pub mod ids;
pub mod income;
pub mod money;

pub use expense::{Expense, ExpenseValidationError, DEFAULT_ICON};
pub use group::ExpenseGroup;
pub use ids::ExpenseId;
pub use income::{Income, IncomeValidationError};
pub use money::{Money, MoneyParseError};
