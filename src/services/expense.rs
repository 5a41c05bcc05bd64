//! Expense service
//!
//! Validates input at the boundary, resolves typed names through the
//! taxonomy, and writes through the ledger.

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Expense, ExpenseGroup, ExpenseId, Money};
use crate::storage::Ledger;
use crate::taxonomy;

/// Input for creating an expense
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub name: String,
    pub amount: Money,
    /// Group name; resolved from the taxonomy when omitted
    pub category: Option<String>,
    /// Icon identifier; resolved from the taxonomy when omitted
    pub icon: Option<String>,
}

impl NewExpense {
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            name: name.into(),
            amount,
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Fields to change on an existing expense; `None` leaves a field alone
#[derive(Debug, Clone, Default)]
pub struct ExpenseUpdate {
    pub name: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub icon: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.icon.is_none()
    }
}

fn check_limit(amount: Money) -> BudgetResult<()> {
    if amount.exceeds_limit() {
        return Err(BudgetError::InvalidAmount(format!(
            "Expense amount cannot exceed {}, got {}",
            Money::MAX,
            amount
        )));
    }
    Ok(())
}

/// Service for expense management
pub struct ExpenseService<'a> {
    ledger: &'a Ledger,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// All expenses, most recently created first
    pub fn list(&self) -> BudgetResult<Vec<Expense>> {
        self.ledger.expenses()
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> BudgetResult<Option<Expense>> {
        self.ledger.get_expense(id)
    }

    /// Record a new expense.
    ///
    /// The amount must be positive and at most `Money::MAX`. A name matching
    /// a catalog key or display name is stored under its canonical display
    /// name, group, and icon; anything else is kept as typed under "other".
    /// An explicit category or icon wins over the catalog.
    pub fn add(&self, input: NewExpense) -> BudgetResult<Expense> {
        if !input.amount.is_positive() {
            return Err(BudgetError::InvalidAmount(format!(
                "Expense amount must be positive, got {}",
                input.amount
            )));
        }
        check_limit(input.amount)?;

        let name = input.name.trim();
        if name.is_empty() {
            return Err(BudgetError::Validation("Expense name cannot be empty".into()));
        }

        let classification = taxonomy::classify(name);
        let category = input
            .category
            .as_deref()
            .map(ExpenseGroup::from_name)
            .unwrap_or(classification.group);
        let icon = input
            .icon
            .filter(|icon| !icon.trim().is_empty())
            .unwrap_or(classification.icon);

        let expense = Expense::new(classification.name, input.amount, category, icon);
        self.insert(expense)
    }

    /// Add a zero-amount pending expense for a catalog key
    pub fn add_pending(&self, key: &str) -> BudgetResult<Expense> {
        let category =
            taxonomy::lookup(key).ok_or_else(|| BudgetError::category_not_found(key.trim()))?;

        let expense = Expense::new(
            category.display_name,
            Money::zero(),
            category.group,
            category.icon,
        );
        self.insert(expense)
    }

    fn insert(&self, expense: Expense) -> BudgetResult<Expense> {
        expense
            .validate()
            .map_err(|e| BudgetError::Validation(e.to_string()))?;

        let expense = self.ledger.insert_expense(expense)?;
        tracing::info!(
            id = %expense.id,
            name = %expense.name,
            amount = %expense.amount,
            "expense added"
        );
        Ok(expense)
    }

    /// Change the given fields of an expense.
    ///
    /// Amounts may be zero (the entry stays pending) but never negative.
    /// Renaming does not re-resolve the category or icon.
    pub fn update(&self, id: ExpenseId, update: ExpenseUpdate) -> BudgetResult<Expense> {
        if let Some(amount) = update.amount {
            if amount.is_negative() {
                return Err(BudgetError::InvalidAmount(format!(
                    "Expense amount cannot be negative, got {}",
                    amount
                )));
            }
            check_limit(amount)?;
        }

        let expense = self.ledger.update_expense(id, |expense| {
            if let Some(name) = update.name {
                expense.name = name.trim().to_string();
            }
            if let Some(amount) = update.amount {
                expense.amount = amount;
            }
            if let Some(category) = update.category {
                expense.category = ExpenseGroup::from_name(&category);
            }
            if let Some(icon) = update.icon {
                expense.icon = icon;
            }

            expense
                .validate()
                .map_err(|e| BudgetError::Validation(e.to_string()))
        })?;

        tracing::info!(id = %expense.id, "expense updated");
        Ok(expense)
    }

    /// Delete an expense. Returns whether anything was removed; an unknown
    /// ID is not an error.
    pub fn delete(&self, id: ExpenseId) -> BudgetResult<bool> {
        match self.ledger.remove_expense(id)? {
            Some(removed) => {
                tracing::info!(id = %removed.id, name = %removed.name, "expense deleted");
                Ok(true)
            }
            None => {
                tracing::debug!(id = %id, "delete of unknown expense ignored");
                Ok(false)
            }
        }
    }

    /// Resolve a full UUID or a short `exp-xxxxxxxx` prefix to an ID
    pub fn find_id(&self, identifier: &str) -> BudgetResult<ExpenseId> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<ExpenseId>() {
            return Ok(id);
        }

        let matches: Vec<ExpenseId> = self
            .ledger
            .expenses()?
            .iter()
            .map(|e| e.id)
            .filter(|id| id.matches_short(identifier))
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(BudgetError::expense_not_found(identifier)),
            _ => Err(BudgetError::Validation(format!(
                "Expense ID '{}' is ambiguous ({} matches)",
                identifier,
                matches.len()
            ))),
        }
    }
}
