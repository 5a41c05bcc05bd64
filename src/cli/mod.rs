//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod budget;
pub mod expense;
pub mod income;

pub use budget::{
    handle_advise_command, handle_categories_command, handle_spending_command,
    handle_suggest_command, handle_summary_command,
};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use income::{handle_income_command, IncomeCommands};
