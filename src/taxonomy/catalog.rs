//! Static expense catalog and related-expense adjacency

use crate::models::ExpenseGroup;

/// A known expense type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseCategory {
    /// Canonical lowercase lookup key
    pub key: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub group: ExpenseGroup,
}

const fn entry(
    key: &'static str,
    display_name: &'static str,
    icon: &'static str,
    group: ExpenseGroup,
) -> ExpenseCategory {
    ExpenseCategory {
        key,
        display_name,
        icon,
        group,
    }
}

use ExpenseGroup::*;

/// Every known expense type, in declaration order
pub static CATALOG: &[ExpenseCategory] = &[
    // Housing
    entry("rent", "Rent", "home", Housing),
    entry("mortgage", "Mortgage", "home-variant", Housing),
    entry("utilities", "Utilities", "flash", Housing),
    entry("internet", "Internet", "wifi", Housing),
    entry("phone bill", "Phone Bill", "phone", Housing),
    entry("cable", "Cable/TV", "television", Housing),
    // Transportation
    entry("car payment", "Car Payment", "car", Transportation),
    entry("car insurance", "Car Insurance", "car-shield", Transportation),
    entry("gas", "Gas", "gas-station", Transportation),
    entry("public transport", "Public Transport", "bus", Transportation),
    entry("uber", "Uber/Lyft", "car-side", Transportation),
    entry("parking", "Parking", "parking", Transportation),
    // Food
    entry("groceries", "Groceries", "cart", Food),
    entry("eating out", "Eating Out", "silverware-fork-knife", Food),
    entry("coffee", "Coffee", "coffee", Food),
    entry("lunch", "Lunch", "food", Food),
    // Health & fitness
    entry("gym membership", "Gym Membership", "dumbbell", Health),
    entry("health insurance", "Health Insurance", "medical-bag", Health),
    entry("doctor visits", "Doctor Visits", "doctor", Health),
    entry("pharmacy", "Pharmacy", "pill", Health),
    entry("dental", "Dental", "tooth", Health),
    // Entertainment
    entry("netflix", "Netflix", "netflix", Entertainment),
    entry("spotify", "Spotify", "spotify", Entertainment),
    entry("movies", "Movies", "movie", Entertainment),
    entry("games", "Games", "gamepad-variant", Entertainment),
    entry("fun", "Fun/Entertainment", "party-popper", Entertainment),
    // Personal care
    entry("haircut", "Haircut", "content-cut", Personal),
    entry("clothing", "Clothing", "tshirt-crew", Personal),
    entry("personal care", "Personal Care", "face-woman", Personal),
    // Financial
    entry("savings", "Savings", "piggy-bank", Financial),
    entry("investments", "Investments", "trending-up", Financial),
    entry("credit card", "Credit Card Payment", "credit-card", Financial),
    entry("loan payment", "Loan Payment", "bank", Financial),
    // Everything else
    entry("pet care", "Pet Care", "dog", Pets),
    entry("childcare", "Childcare", "baby-face", Family),
    entry("education", "Education", "school", Education),
    entry("books", "Books", "book", Education),
];

/// Complementary expenses, keyed by catalog key.
///
/// "pet care" lists itself; generators must never suggest the source key.
pub static RELATED: &[(&str, &[&str])] = &[
    ("car payment", &["gas", "car insurance", "parking"]),
    ("rent", &["utilities", "internet", "cable"]),
    ("mortgage", &["utilities", "internet", "cable"]),
    ("gym membership", &["health insurance", "personal care", "doctor visits"]),
    ("groceries", &["eating out", "lunch", "coffee"]),
    ("netflix", &["spotify", "cable", "internet"]),
    ("health insurance", &["doctor visits", "pharmacy", "dental"]),
    ("pet care", &["pet care", "doctor visits"]),
    ("childcare", &["education", "health insurance"]),
];
