//! Budget summary display
//!
//! Formats the snapshot, its two-segment proportion bar, and the spending
//! breakdown by group.

use crate::models::Money;
use crate::reports::{BudgetSnapshot, BudgetStatus, GroupTotal};

/// Width of the proportion bar in characters
pub const BAR_WIDTH: usize = 40;

fn status_label(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::Deficit => "Deficit ⚠",
        BudgetStatus::LowSavings => "Low savings",
        BudgetStatus::Surplus => "Surplus ✓",
        BudgetStatus::OnTrack => "On track ✓",
    }
}

/// Render the expense/remaining split as a fixed-width bar.
///
/// `#` marks spending, `=` what is left, and `.` anything unaccounted for
/// (zero income).
pub fn format_proportion_bar(snapshot: &BudgetSnapshot, width: usize) -> String {
    let proportion = snapshot.proportion();
    let cells = |share: f64| ((share / 100.0) * width as f64).round() as usize;

    let spent = cells(proportion.expense_share).min(width);
    let left = cells(proportion.remaining_share).min(width - spent);
    let empty = width - spent - left;

    format!(
        "[{}{}{}] {:.0}% spent / {:.0}% left",
        "#".repeat(spent),
        "=".repeat(left),
        ".".repeat(empty),
        proportion.expense_share,
        proportion.remaining_share
    )
}

/// Format the budget summary
pub fn format_budget_summary(snapshot: &BudgetSnapshot, symbol: &str) -> String {
    let money = |m: Money| m.format_with_symbol(symbol);
    let mut output = String::new();

    output.push_str("Monthly Budget\n");
    output.push_str(&format!("{}\n", "=".repeat(50)));
    output.push_str(&format!("Income:          {:>14}\n", money(snapshot.income)));
    output.push_str(&format!(
        "Total Expenses:  {:>14}  ({:.1}%)\n",
        money(snapshot.total_expenses),
        snapshot.expense_percentage
    ));
    output.push_str(&format!("{}\n", "-".repeat(50)));

    let remaining_label = if snapshot.is_positive() {
        "Remaining:"
    } else {
        "Overspent:"
    };
    output.push_str(&format!(
        "{:<17}{:>14}  ({:.1}%)\n",
        remaining_label,
        money(snapshot.remaining),
        snapshot.remaining_percentage
    ));
    output.push_str(&format!("Status:          {}\n", status_label(snapshot.status)));
    output.push_str(&format!("Expenses:        {}\n", snapshot.expense_count));
    output.push('\n');
    output.push_str(&format_proportion_bar(snapshot, BAR_WIDTH));
    output.push('\n');

    output
}

/// Format spending per group as a table
pub fn format_spending_by_group(totals: &[GroupTotal], symbol: &str) -> String {
    if totals.is_empty() {
        return "No spending recorded.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<16}  {:>12}  {:>6}  {:>5}\n", "Group", "Total", "Share", "Items"));
    output.push_str(&format!("{:-<16}  {:->12}  {:->6}  {:->5}\n", "", "", "", ""));

    for total in totals {
        output.push_str(&format!(
            "{:<16}  {:>12}  {:>5.1}%  {:>5}\n",
            total.group.to_string(),
            total.total.format_with_symbol(symbol),
            total.percentage,
            total.expense_count
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseGroup, DEFAULT_ICON};
    use crate::reports::spending_by_group;

    fn snapshot(income: i64, spent: &[i64]) -> BudgetSnapshot {
        let expenses: Vec<Expense> = spent
            .iter()
            .map(|&c| Expense::new("Item", Money::from_cents(c), ExpenseGroup::Other, DEFAULT_ICON))
            .collect();
        BudgetSnapshot::compute(Money::from_cents(income), &expenses)
    }

    #[test]
    fn test_bar_overspent_is_full() {
        let bar = format_proportion_bar(&snapshot(100_000, &[120_000]), 10);
        assert_eq!(bar, "[##########] 100% spent / 0% left");
    }

    #[test]
    fn test_bar_half_spent() {
        let bar = format_proportion_bar(&snapshot(100_000, &[50_000]), 10);
        assert_eq!(bar, "[#####=====] 50% spent / 50% left");
    }

    #[test]
    fn test_bar_zero_income_is_empty() {
        let bar = format_proportion_bar(&snapshot(0, &[]), 4);
        assert_eq!(bar, "[....] 0% spent / 0% left");
    }

    #[test]
    fn test_summary_shows_overspend() {
        let output = format_budget_summary(&snapshot(100_000, &[120_000]), "$");
        assert!(output.contains("Overspent:"));
        assert!(output.contains("-$200.00"));
        assert!(output.contains("Deficit"));
    }

    #[test]
    fn test_spending_table() {
        let expenses = vec![
            Expense::new("Rent", Money::from_cents(75_000), ExpenseGroup::Housing, "home"),
            Expense::new("Gas", Money::from_cents(25_000), ExpenseGroup::Transportation, "gas"),
        ];
        let output = format_spending_by_group(&spending_by_group(&expenses), "£");
        assert!(output.contains("Housing"));
        assert!(output.contains("£750.00"));
        assert!(output.contains("75.0%"));
        assert_eq!(format_spending_by_group(&[], "$"), "No spending recorded.");
    }
}
