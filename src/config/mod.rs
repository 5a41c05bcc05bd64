//! Configuration module for Budget Buddy
//!
//! - Path resolution for settings and the ledger file
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::{Currency, Language, Settings};
