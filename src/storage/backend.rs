//! Durability backends for the ledger
//!
//! A backend loads the whole ledger once and then receives the complete
//! next state on every commit. `commit` must not return `Ok` until the state
//! would survive a crash.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, Income};

use super::file_io::{read_json, write_json_atomic};

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Everything the ledger persists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub income: Income,
    /// Expenses in creation order
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub next_sequence: u64,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for LedgerData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            income: Income::default(),
            expenses: Vec::new(),
            next_sequence: 0,
        }
    }
}

impl LedgerData {
    /// Reject unknown schemas and repair the sequence counter
    pub fn normalize(mut self) -> BudgetResult<Self> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(BudgetError::Persistence(format!(
                "Unsupported ledger schema version {} (expected {} or lower)",
                self.schema_version, SCHEMA_VERSION
            )));
        }
        self.schema_version = SCHEMA_VERSION;

        let next_free = self
            .expenses
            .iter()
            .map(|e| e.sequence + 1)
            .max()
            .unwrap_or(0);
        self.next_sequence = self.next_sequence.max(next_free);

        Ok(self)
    }
}

/// Abstraction over the durability layer
pub trait LedgerBackend: Send + Sync {
    /// Load the last committed state; a fresh store yields `LedgerData::default()`
    fn load(&self) -> BudgetResult<LedgerData>;

    /// Durably replace the stored state with `data`
    fn commit(&self, data: &LedgerData) -> BudgetResult<()>;

    /// Human-readable location, for logs
    fn describe(&self) -> String;
}

/// Ledger stored as a single JSON document
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl LedgerBackend for JsonFileBackend {
    fn load(&self) -> BudgetResult<LedgerData> {
        read_json(&self.path)
    }

    fn commit(&self, data: &LedgerData) -> BudgetResult<()> {
        write_json_atomic(&self.path, data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
struct MemoryInner {
    data: Mutex<LedgerData>,
    fail_commits: AtomicBool,
    commits: AtomicUsize,
}

/// Ledger kept in process memory, for tests and throwaway sessions.
///
/// Clones share the same storage, so a test can keep a handle after giving
/// one to the ledger.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<MemoryInner>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with previously committed data
    pub fn with_data(data: LedgerData) -> Self {
        let backend = Self::default();
        if let Ok(mut stored) = backend.inner.data.lock() {
            *stored = data;
        }
        backend
    }

    /// Make every subsequent commit fail (or succeed again)
    pub fn fail_commits(&self, fail: bool) {
        self.inner.fail_commits.store(fail, Ordering::SeqCst);
    }

    /// The last successfully committed state
    pub fn committed(&self) -> BudgetResult<LedgerData> {
        self.inner
            .data
            .lock()
            .map(|d| d.clone())
            .map_err(|e| BudgetError::Persistence(format!("Failed to acquire lock: {}", e)))
    }

    /// Number of successful commits
    pub fn commit_count(&self) -> usize {
        self.inner.commits.load(Ordering::SeqCst)
    }
}

impl LedgerBackend for MemoryBackend {
    fn load(&self) -> BudgetResult<LedgerData> {
        self.committed()
    }

    fn commit(&self, data: &LedgerData) -> BudgetResult<()> {
        if self.inner.fail_commits.load(Ordering::SeqCst) {
            return Err(BudgetError::Persistence("memory backend rejected commit".into()));
        }
        let mut stored = self
            .inner
            .data
            .lock()
            .map_err(|e| BudgetError::Persistence(format!("Failed to acquire lock: {}", e)))?;
        *stored = data.clone();
        self.inner.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseGroup, Money};
    use tempfile::TempDir;

    #[test]
    fn test_json_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let backend = JsonFileBackend::new(temp_dir.path().join("ledger.json"));

        assert_eq!(backend.load().unwrap(), LedgerData::default());

        let mut data = LedgerData::default();
        data.income = Income::new(Money::from_cents(500000));
        let rent = Expense::new("Rent", Money::from_cents(150000), ExpenseGroup::Housing, "home");
        data.expenses.push(rent);
        backend.commit(&data).unwrap();

        assert_eq!(backend.load().unwrap(), data);
    }

    #[test]
    fn test_normalize_repairs_sequence() {
        let mut data = LedgerData::default();
        let mut expense = Expense::new("Rent", Money::from_cents(1), ExpenseGroup::Housing, "home");
        expense.sequence = 41;
        data.expenses.push(expense);

        let data = data.normalize().unwrap();
        assert_eq!(data.next_sequence, 42);
    }

    #[test]
    fn test_normalize_rejects_future_schema() {
        let data = LedgerData {
            schema_version: SCHEMA_VERSION + 1,
            ..LedgerData::default()
        };
        assert!(data.normalize().unwrap_err().is_persistence());
    }

    #[test]
    fn test_memory_backend_failure_keeps_last_commit() {
        let backend = MemoryBackend::new();
        let mut data = LedgerData::default();
        data.income = Income::new(Money::from_cents(100));
        backend.commit(&data).unwrap();

        backend.fail_commits(true);
        let mut next = data.clone();
        next.income = Income::new(Money::from_cents(200));
        assert!(backend.commit(&next).is_err());

        assert_eq!(backend.committed().unwrap().income.amount.cents(), 100);
        assert_eq!(backend.commit_count(), 1);
    }
}
