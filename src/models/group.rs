//! Coarse spending groups used for chart aggregation

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of spending groups an expense can belong to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseGroup {
    Housing,
    Transportation,
    Food,
    Health,
    Entertainment,
    Personal,
    Financial,
    Pets,
    Family,
    Education,
    #[default]
    #[serde(other)]
    Other,
}

impl ExpenseGroup {
    /// All groups in declaration order
    pub fn all() -> &'static [ExpenseGroup] {
        &[
            Self::Housing,
            Self::Transportation,
            Self::Food,
            Self::Health,
            Self::Entertainment,
            Self::Personal,
            Self::Financial,
            Self::Pets,
            Self::Family,
            Self::Education,
            Self::Other,
        ]
    }

    /// Lowercase identifier, as persisted
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Health => "health",
            Self::Entertainment => "entertainment",
            Self::Personal => "personal",
            Self::Financial => "financial",
            Self::Pets => "pets",
            Self::Family => "family",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    /// Resolve a group name; anything unrecognized falls back to `Other`
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::all()
            .iter()
            .copied()
            .find(|g| g.as_str().eq_ignore_ascii_case(name))
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for ExpenseGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(ExpenseGroup::from_name("housing"), ExpenseGroup::Housing);
        assert_eq!(ExpenseGroup::from_name(" Food "), ExpenseGroup::Food);
        assert_eq!(ExpenseGroup::from_name("crypto"), ExpenseGroup::Other);
        assert_eq!(ExpenseGroup::from_name(""), ExpenseGroup::Other);
    }

    #[test]
    fn test_display_capitalizes() {
        assert_eq!(ExpenseGroup::Transportation.to_string(), "Transportation");
        assert_eq!(ExpenseGroup::Other.to_string(), "Other");
    }

    #[test]
    fn test_unknown_group_deserializes_as_other() {
        let group: ExpenseGroup = serde_json::from_str("\"gifts\"").unwrap();
        assert_eq!(group, ExpenseGroup::Other);
        assert_eq!(serde_json::to_string(&ExpenseGroup::Pets).unwrap(), "\"pets\"");
    }
}
