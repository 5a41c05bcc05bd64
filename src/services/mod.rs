//! Service layer for Budget Buddy
//!
//! Business logic on top of the ledger: boundary validation, taxonomy
//! resolution of typed names, and the derived budget views.

pub mod budget;
pub mod expense;
pub mod income;

pub use budget::BudgetService;
pub use expense::{ExpenseService, ExpenseUpdate, NewExpense};
pub use income::IncomeService;
