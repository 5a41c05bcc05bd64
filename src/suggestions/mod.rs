//! Suggestion engine
//!
//! Two independent generators:
//!
//! - `related_expenses`: catalog entries that complement what is tracked
//! - `Advisor`: rule-based advice over the budget snapshot

pub mod advisory;
pub mod related;

pub use advisory::{Advisor, AdvisoryItem, Severity};
pub use related::{related_expenses, Surface};

use serde::Serialize;

use crate::taxonomy::ExpenseCategory;

/// Any suggestion shown to the user; regenerated on demand, never stored
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Suggestion {
    /// A catalog entry worth adding, with its display name and icon
    RelatedExpense {
        key: &'static str,
        display_name: &'static str,
        icon: &'static str,
    },
    AdvisoryTip(AdvisoryItem),
}

impl From<&ExpenseCategory> for Suggestion {
    fn from(category: &ExpenseCategory) -> Self {
        Self::RelatedExpense {
            key: category.key,
            display_name: category.display_name,
            icon: category.icon,
        }
    }
}

impl From<AdvisoryItem> for Suggestion {
    fn from(item: AdvisoryItem) -> Self {
        Self::AdvisoryTip(item)
    }
}
