//! Financial calculations
//!
//! Pure functions over an income figure and a list of expenses:
//!
//! - `BudgetSnapshot`: totals, remaining balance, percentages, and status
//! - `spending_by_group`: per-group totals for the chart view

pub mod snapshot;
pub mod spending;

pub use snapshot::{BudgetSnapshot, BudgetStatus, Proportion};
pub use spending::{spending_by_group, GroupTotal};
