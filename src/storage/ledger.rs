//! The ledger: system of record for income and expenses
//!
//! Writers are serialized by a mutex. Each mutation is applied to a copy of
//! the current state, committed through the backend, and only then published
//! to readers. A failed commit leaves the published state untouched.

use std::sync::{Mutex, RwLock};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseId, Income};

use super::backend::{LedgerBackend, LedgerData, MemoryBackend};

/// Outcome of a mutation closure
enum Change<T> {
    Commit(T),
    Unchanged(T),
}

/// Durable income and expense store for the single budget profile
pub struct Ledger {
    backend: Box<dyn LedgerBackend>,
    state: RwLock<LedgerData>,
    writer: Mutex<()>,
}

impl Ledger {
    /// Open a ledger, loading the last committed state from `backend`
    pub fn open(backend: impl LedgerBackend + 'static) -> BudgetResult<Self> {
        let data = backend.load()?.normalize()?;
        tracing::debug!(
            backend = %backend.describe(),
            expenses = data.expenses.len(),
            "ledger opened"
        );

        Ok(Self {
            backend: Box::new(backend),
            state: RwLock::new(data),
            writer: Mutex::new(()),
        })
    }

    /// Open an empty ledger backed by memory
    pub fn in_memory() -> Self {
        Self {
            backend: Box::new(MemoryBackend::new()),
            state: RwLock::new(LedgerData::default()),
            writer: Mutex::new(()),
        }
    }

    /// Close the ledger. Every successful write is already committed.
    pub fn close(self) {
        tracing::debug!(backend = %self.backend.describe(), "ledger closed");
    }

    fn read(&self) -> BudgetResult<std::sync::RwLockReadGuard<'_, LedgerData>> {
        self.state
            .read()
            .map_err(|e| BudgetError::Persistence(format!("Failed to acquire read lock: {}", e)))
    }

    /// Apply `op` to a copy of the state and commit it if it changed anything
    fn transact<T, F>(&self, op: F) -> BudgetResult<T>
    where
        F: FnOnce(&mut LedgerData) -> BudgetResult<Change<T>>,
    {
        let _writer = self.writer.lock().map_err(|e| {
            BudgetError::Persistence(format!("Failed to acquire writer lock: {}", e))
        })?;

        let mut next = self.read()?.clone();

        match op(&mut next)? {
            Change::Unchanged(value) => Ok(value),
            Change::Commit(value) => {
                if let Err(err) = self.backend.commit(&next) {
                    tracing::error!(error = %err, "ledger commit failed");
                    return Err(err);
                }

                let mut state = self.state.write().map_err(|e| {
                    BudgetError::Persistence(format!("Failed to acquire write lock: {}", e))
                })?;
                *state = next;
                Ok(value)
            }
        }
    }

    /// Current income (zero if never set)
    pub fn income(&self) -> BudgetResult<Income> {
        Ok(self.read()?.income.clone())
    }

    /// Replace the income record
    pub fn set_income(&self, income: Income) -> BudgetResult<Income> {
        self.transact(|data| {
            data.income = income.clone();
            Ok(Change::Commit(income))
        })
    }

    /// All expenses, most recently created first
    pub fn expenses(&self) -> BudgetResult<Vec<Expense>> {
        let mut expenses = self.read()?.expenses.clone();
        expenses.sort_by(|a, b| {
            b.sequence
                .cmp(&a.sequence)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(expenses)
    }

    /// Get an expense by ID
    pub fn get_expense(&self, id: ExpenseId) -> BudgetResult<Option<Expense>> {
        Ok(self.read()?.expenses.iter().find(|e| e.id == id).cloned())
    }

    /// Number of stored expenses
    pub fn expense_count(&self) -> BudgetResult<usize> {
        Ok(self.read()?.expenses.len())
    }

    /// Store a new expense, assigning its creation sequence
    pub fn insert_expense(&self, mut expense: Expense) -> BudgetResult<Expense> {
        self.transact(|data| {
            if data.expenses.iter().any(|e| e.id == expense.id) {
                expense.id = ExpenseId::new();
            }
            expense.sequence = data.next_sequence;
            data.next_sequence += 1;
            data.expenses.push(expense.clone());
            Ok(Change::Commit(expense))
        })
    }

    /// Modify an expense in place; fails with `NotFound` for unknown IDs
    pub fn update_expense<F>(&self, id: ExpenseId, update: F) -> BudgetResult<Expense>
    where
        F: FnOnce(&mut Expense) -> BudgetResult<()>,
    {
        self.transact(|data| {
            let expense = data
                .expenses
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

            update(expense)?;
            expense.touch();
            Ok(Change::Commit(expense.clone()))
        })
    }

    /// Remove an expense; unknown IDs are a no-op returning `None`
    pub fn remove_expense(&self, id: ExpenseId) -> BudgetResult<Option<Expense>> {
        self.transact(|data| {
            match data.expenses.iter().position(|e| e.id == id) {
                Some(index) => Ok(Change::Commit(Some(data.expenses.remove(index)))),
                None => Ok(Change::Unchanged(None)),
            }
        })
    }
}
