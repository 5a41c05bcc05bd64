//! Storage layer for Budget Buddy
//!
//! The `Ledger` owns all persisted state and commits every write through a
//! `LedgerBackend` before reporting success. Two backends ship with the
//! crate: an atomic JSON file and an in-memory store for tests.

pub mod backend;
pub mod file_io;
pub mod ledger;

pub use backend::{JsonFileBackend, LedgerBackend, LedgerData, MemoryBackend, SCHEMA_VERSION};
pub use file_io::{read_json, write_json_atomic};
pub use ledger::Ledger;

use crate::config::paths::BudgetPaths;
use crate::error::BudgetResult;

/// Open the JSON ledger under the configured data directory
pub fn open_file_ledger(paths: &BudgetPaths) -> BudgetResult<Ledger> {
    paths.ensure_directories()?;
    Ledger::open(JsonFileBackend::new(paths.ledger_file()))
}
