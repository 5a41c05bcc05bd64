//! Related-expense suggestions
//!
//! Proposes catalog entries the user has probably forgotten, based on what
//! they already track. Output is deterministic for a given expense list and
//! surface.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Expense;
use crate::taxonomy::{self, ExpenseCategory};

/// The UI context asking for suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Surface {
    /// Bubbles under the expense list
    #[default]
    Inline,
    /// The quick-add modal
    QuickAdd,
}

impl Surface {
    /// Below this many related candidates, backfill kicks in
    pub fn floor(&self) -> usize {
        match self {
            Self::Inline => 3,
            Self::QuickAdd => 6,
        }
    }

    /// Maximum number of suggestions returned
    pub fn cap(&self) -> usize {
        match self {
            Self::Inline => 6,
            Self::QuickAdd => 8,
        }
    }

    /// Keys offered before falling back to the full catalog
    pub fn preferred(&self) -> &'static [&'static str] {
        match self {
            Self::Inline => &["groceries", "utilities", "rent", "phone bill"],
            Self::QuickAdd => &[
                "groceries",
                "utilities",
                "gas",
                "netflix",
                "coffee",
                "phone bill",
                "rent",
                "gym membership",
            ],
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline => write!(f, "inline"),
            Self::QuickAdd => write!(f, "quick-add"),
        }
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inline" => Ok(Self::Inline),
            "quick-add" | "quickadd" | "quick" => Ok(Self::QuickAdd),
            other => Err(format!("Unknown surface: {}", other)),
        }
    }
}

/// Insertion-ordered set of candidate keys
struct Candidates {
    keys: Vec<&'static str>,
    seen: HashSet<&'static str>,
    existing: HashSet<String>,
}

impl Candidates {
    fn new(expenses: &[Expense]) -> Self {
        Self {
            keys: Vec::new(),
            seen: HashSet::new(),
            existing: expenses
                .iter()
                .map(|e| e.name.trim().to_lowercase())
                .collect(),
        }
    }

    fn is_tracked(&self, category: &ExpenseCategory) -> bool {
        self.existing.contains(&category.display_name.to_lowercase())
    }

    fn offer(&mut self, key: &'static str) {
        if let Some(category) = taxonomy::lookup(key) {
            if !self.is_tracked(category) && self.seen.insert(category.key) {
                self.keys.push(category.key);
            }
        }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Suggest catalog keys that complement the current expenses.
///
/// Related entries come first, in order of discovery. If fewer than the
/// surface floor are found, the surface's preferred list fills up to the
/// cap and then the full catalog fills up to the floor. Keys whose display
/// name is already tracked are never returned.
pub fn related_expenses(expenses: &[Expense], surface: Surface) -> Vec<&'static str> {
    let mut candidates = Candidates::new(expenses);

    for expense in expenses {
        let Some(source) = taxonomy::lookup_display_name(&expense.name) else {
            continue;
        };
        for &related in taxonomy::related_of(source.key) {
            if related != source.key {
                candidates.offer(related);
            }
        }
    }

    if candidates.len() < surface.floor() {
        for &key in surface.preferred() {
            if candidates.len() >= surface.cap() {
                break;
            }
            candidates.offer(key);
        }

        for category in taxonomy::all() {
            if candidates.len() >= surface.floor() {
                break;
            }
            candidates.offer(category.key);
        }
    }

    let mut keys = candidates.keys;
    keys.truncate(surface.cap());
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseGroup, Money, DEFAULT_ICON};

    fn named(name: &str) -> Expense {
        Expense::new(name, Money::from_cents(1_000), ExpenseGroup::Other, DEFAULT_ICON)
    }

    #[test]
    fn test_related_suggestions_come_first() {
        let expenses = vec![named("Car Payment"), named("Rent")];
        let keys = related_expenses(&expenses, Surface::Inline);
        assert_eq!(
            keys,
            vec!["gas", "car insurance", "parking", "utilities", "internet", "cable"]
        );
    }

    #[test]
    fn test_tracked_names_are_excluded() {
        let expenses = vec![named("car payment"), named("GAS")];
        let keys = related_expenses(&expenses, Surface::Inline);
        assert!(!keys.contains(&"gas"));
        assert_eq!(&keys[..2], &["car insurance", "parking"]);
        assert_eq!(keys.len(), 2 + 4);
    }

    #[test]
    fn test_self_reference_is_not_suggested() {
        let keys = related_expenses(&[named("Pet Care")], Surface::Inline);
        assert!(!keys.contains(&"pet care"));
        assert_eq!(keys[0], "doctor visits");
    }

    #[test]
    fn test_empty_list_backfills_quick_add() {
        let keys = related_expenses(&[], Surface::QuickAdd);
        assert_eq!(
            keys,
            vec![
                "groceries",
                "utilities",
                "gas",
                "netflix",
                "coffee",
                "phone bill",
                "rent",
                "gym membership"
            ]
        );
    }

    #[test]
    fn test_empty_list_backfills_inline() {
        let keys = related_expenses(&[], Surface::Inline);
        assert_eq!(keys, vec!["groceries", "utilities", "rent", "phone bill"]);
    }

    #[test]
    fn test_catalog_backfill_when_preferred_exhausted() {
        let expenses = vec![
            named("Utilities"),
            named("Phone Bill"),
            named("Gas"),
            named("Coffee"),
        ];

        let keys = related_expenses(&expenses, Surface::QuickAdd);
        assert_eq!(
            keys,
            vec!["groceries", "netflix", "rent", "gym membership", "mortgage", "internet"]
        );
        assert_eq!(keys.len(), Surface::QuickAdd.floor());
    }

    #[test]
    fn test_enough_related_skips_backfill() {
        let expenses = vec![named("Rent"), named("Car Payment"), named("Gym Membership")];
        let keys = related_expenses(&expenses, Surface::QuickAdd);
        assert_eq!(keys.len(), 8);
        assert!(!keys.contains(&"groceries"));
    }

    #[test]
    fn test_deterministic() {
        let expenses = vec![named("Groceries"), named("Netflix"), named("Custom thing")];
        let first = related_expenses(&expenses, Surface::QuickAdd);
        let second = related_expenses(&expenses, Surface::QuickAdd);
        assert_eq!(first, second);
    }

    #[test]
    fn test_surface_from_str() {
        assert_eq!("quick-add".parse::<Surface>().unwrap(), Surface::QuickAdd);
        assert_eq!("INLINE".parse::<Surface>().unwrap(), Surface::Inline);
        assert!("sidebar".parse::<Surface>().is_err());
    }
}
