//! Budget Buddy - monthly budget tracking with suggestions
//!
//! A single monthly income and a list of recurring expenses, kept in a
//! durable ledger. Everything else is derived on demand: the remaining
//! balance and its status, spending by group, expenses worth adding, and
//! rule-based advice.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, income, expenses, and spending groups
//! - `taxonomy`: The static catalog of known expense types
//! - `reports`: Snapshot and spending calculations
//! - `suggestions`: Related-expense and advisory generators
//! - `storage`: The ledger and its persistence backends
//! - `services`: Business logic layer
//! - `display` / `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use budget_buddy::services::{BudgetService, ExpenseService, NewExpense};
//! use budget_buddy::storage::Ledger;
//!
//! let ledger = Ledger::in_memory();
//! ExpenseService::new(&ledger).add(NewExpense::new("rent", Money::from_cents(150_000)))?;
//! let snapshot = BudgetService::new(&ledger).snapshot()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod suggestions;
pub mod taxonomy;

pub use error::{BudgetError, BudgetResult};
