//! Suggestion display formatting
//!
//! Advice items, related-expense bubbles, and catalog listings.

use crate::suggestions::{AdvisoryItem, Severity};
use crate::taxonomy::ExpenseCategory;

fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Warning => "!!",
        Severity::Caution => "! ",
        Severity::Opportunity => "$ ",
        Severity::Alternative => "~ ",
        Severity::Tip => "* ",
        Severity::Info => "i ",
    }
}

/// Format advice items, one block per item
pub fn format_advisory(items: &[AdvisoryItem], symbol: &str) -> String {
    if items.is_empty() {
        return "No suggestions right now. Your budget looks balanced.".to_string();
    }

    let mut output = String::new();
    for (i, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "{} {} [{}]\n",
            severity_marker(item.severity),
            item.title,
            item.severity
        ));
        output.push_str(&format!("   {}\n", item.message));
        if let Some(savings) = item.projected_monthly_savings {
            output.push_str(&format!(
                "   Potential savings: {}/month\n",
                savings.format_with_symbol(symbol)
            ));
        }
        if i < items.len() - 1 {
            output.push('\n');
        }
    }

    output
}

/// Format suggested expenses as a compact list
pub fn format_related(categories: &[&ExpenseCategory]) -> String {
    if categories.is_empty() {
        return "Nothing to suggest. You're tracking everything we know about.".to_string();
    }

    let mut output = String::new();
    output.push_str("You might also want to track:\n");
    for category in categories {
        output.push_str(&format!("  + {:<20} ({})\n", category.display_name, category.key));
    }
    output.push('\n');
    output.push_str("Use 'budget expense suggest <key>' to add one.\n");
    output
}

/// Format catalog entries with their group and icon
pub fn format_category_list(categories: &[&ExpenseCategory]) -> String {
    if categories.is_empty() {
        return "No matching categories.".to_string();
    }

    let key_width = categories
        .iter()
        .map(|c| c.key.len())
        .max()
        .unwrap_or(3)
        .max(3);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<key_width$}  {:<20}  {:<14}  {}\n",
        "Key",
        "Name",
        "Group",
        "Icon",
        key_width = key_width
    ));
    output.push_str(&format!(
        "{:-<key_width$}  {:-<20}  {:-<14}  {:-<12}\n",
        "",
        "",
        "",
        "",
        key_width = key_width
    ));
    for category in categories {
        output.push_str(&format!(
            "{:<key_width$}  {:<20}  {:<14}  {}\n",
            category.key,
            category.display_name,
            category.group.to_string(),
            category.icon,
            key_width = key_width
        ));
    }

    output
}
