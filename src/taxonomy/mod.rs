//! Category taxonomy
//!
//! Read-only lookups over the static expense catalog: exact key lookup,
//! autocomplete matching, related-expense adjacency, and the resolution of
//! free-text names into canonical records.

mod catalog;

pub use catalog::{ExpenseCategory, CATALOG, RELATED};

use crate::models::{ExpenseGroup, DEFAULT_ICON};

/// Maximum number of autocomplete matches
pub const MAX_TEXT_MATCHES: usize = 5;

/// All catalog entries in declaration order
pub fn all() -> &'static [ExpenseCategory] {
    CATALOG
}

/// Look up an entry by its key (case-insensitive)
pub fn lookup(key: &str) -> Option<&'static ExpenseCategory> {
    let key = key.trim();
    CATALOG.iter().find(|c| c.key.eq_ignore_ascii_case(key))
}

/// Look up an entry by its display name (case-insensitive)
pub fn lookup_display_name(name: &str) -> Option<&'static ExpenseCategory> {
    let name = name.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|c| c.display_name.to_lowercase() == name)
}

/// Keys whose key or display name contains `text`, case-insensitively.
///
/// Returns at most [`MAX_TEXT_MATCHES`] keys in catalog order.
pub fn find_by_free_text(text: &str) -> Vec<&'static str> {
    let needle = text.trim().to_lowercase();
    CATALOG
        .iter()
        .filter(|c| c.key.contains(&needle) || c.display_name.to_lowercase().contains(&needle))
        .map(|c| c.key)
        .take(MAX_TEXT_MATCHES)
        .collect()
}

/// Autocomplete entries for text typed into an input box.
///
/// Nothing is offered until more than one character has been typed.
pub fn autocomplete(text: &str) -> Vec<&'static ExpenseCategory> {
    if text.trim().chars().count() <= 1 {
        return Vec::new();
    }
    find_by_free_text(text)
        .into_iter()
        .filter_map(lookup)
        .collect()
}

/// Keys declared as complementary to `key`; empty if none
pub fn related_of(key: &str) -> &'static [&'static str] {
    let key = key.trim();
    RELATED
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, related)| *related)
        .unwrap_or(&[])
}

/// Match typed text against a key first, then against a display name
pub fn resolve(text: &str) -> Option<&'static ExpenseCategory> {
    lookup(text).or_else(|| lookup_display_name(text))
}

/// Canonical name, group, and icon for a typed expense name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub name: String,
    pub group: ExpenseGroup,
    pub icon: String,
    /// Whether the name matched a catalog entry
    pub known: bool,
}

impl Classification {
    /// A stand-in for text the catalog does not know
    pub fn synthetic(text: &str) -> Self {
        Self {
            name: text.trim().to_string(),
            group: ExpenseGroup::Other,
            icon: DEFAULT_ICON.to_string(),
            known: false,
        }
    }
}

impl From<&ExpenseCategory> for Classification {
    fn from(category: &ExpenseCategory) -> Self {
        Self {
            name: category.display_name.to_string(),
            group: category.group,
            icon: category.icon.to_string(),
            known: true,
        }
    }
}

/// Classify a typed name, falling back to a synthetic "other" record
pub fn classify(text: &str) -> Classification {
    match resolve(text) {
        Some(category) => Classification::from(category),
        None => {
            tracing::debug!(name = text.trim(), "no catalog match, using synthetic category");
            Classification::synthetic(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for category in CATALOG {
            assert!(seen.insert(category.key), "duplicate key {}", category.key);
            assert_eq!(category.key, category.key.to_lowercase());
        }
    }

    #[test]
    fn test_related_keys_exist() {
        for (key, related) in RELATED {
            assert!(lookup(key).is_some(), "unknown source {}", key);
            for r in *related {
                assert!(lookup(r).is_some(), "unknown related key {}", r);
            }
        }
    }

    #[test]
    fn test_lookup() {
        let rent = lookup("rent").unwrap();
        assert_eq!(rent.display_name, "Rent");
        assert_eq!(rent.group, ExpenseGroup::Housing);
        assert_eq!(lookup("Car Payment").unwrap().icon, "car");
        assert!(lookup("yacht").is_none());
    }

    #[test]
    fn test_find_by_free_text_matches_key_and_name() {
        assert_eq!(
            find_by_free_text("car"),
            vec!["car payment", "car insurance", "personal care", "credit card", "pet care"]
        );
        // "lyft" only appears in the display name
        assert_eq!(find_by_free_text("LYFT"), vec!["uber"]);
    }

    #[test]
    fn test_find_by_free_text_caps_at_five() {
        let matches = find_by_free_text("e");
        assert_eq!(matches.len(), MAX_TEXT_MATCHES);
        assert_eq!(matches[0], "rent");
    }

    #[test]
    fn test_autocomplete_needs_two_characters() {
        assert!(autocomplete("g").is_empty());
        let names: Vec<_> = autocomplete("gy").iter().map(|c| c.display_name).collect();
        assert_eq!(names, vec!["Gym Membership"]);
    }

    #[test]
    fn test_related_of() {
        assert_eq!(related_of("car payment"), &["gas", "car insurance", "parking"]);
        assert!(related_of("coffee").is_empty());
        assert!(related_of("unknown").is_empty());
    }

    #[test]
    fn test_classify_known_and_unknown() {
        let known = classify("cable/tv");
        assert!(known.known);
        assert_eq!(known.name, "Cable/TV");
        assert_eq!(known.icon, "television");

        let by_key = classify("CABLE");
        assert_eq!(by_key.name, "Cable/TV");

        let unknown = classify("  Lottery tickets ");
        assert!(!unknown.known);
        assert_eq!(unknown.name, "Lottery tickets");
        assert_eq!(unknown.group, ExpenseGroup::Other);
        assert_eq!(unknown.icon, DEFAULT_ICON);
    }
}
