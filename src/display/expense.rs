//! Expense display formatting

use crate::models::Expense;

/// Format expenses as a table, in the order given
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses yet.\n\nUse 'budget expense add <name> <amount>' to add one."
            .to_string();
    }

    let name_width = expenses
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:>12}  {:<14}\n",
        "ID",
        "Name",
        "Amount",
        "Group",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<12}  {:-<name_width$}  {:->12}  {:-<14}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for expense in expenses {
        let amount = if expense.is_pending() {
            "pending".to_string()
        } else {
            expense.amount.format_with_symbol(symbol)
        };
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:>12}  {:<14}\n",
            expense.id.to_string(),
            expense.name,
            amount,
            expense.category.to_string(),
            name_width = name_width,
        ));
    }

    output
}

/// Format a single expense
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:       {}\n", expense.id.as_uuid()));
    output.push_str(&format!(
        "  Amount:   {}\n",
        expense.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("  Group:    {}\n", expense.category));
    output.push_str(&format!("  Icon:     {}\n", expense.icon));
    output.push_str(&format!(
        "  Created:  {}\n",
        expense.created_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!(
        "  Modified: {}\n",
        expense.updated_at.format("%Y-%m-%d %H:%M UTC")
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseGroup, Money};

    #[test]
    fn test_empty_list() {
        assert!(format_expense_list(&[], "$").starts_with("No expenses yet."));
    }

    #[test]
    fn test_list_rows() {
        let rent = Expense::new("Rent", Money::from_cents(120_000), ExpenseGroup::Housing, "home");
        let gas = Expense::new("Gas", Money::zero(), ExpenseGroup::Transportation, "gas-station");
        let output = format_expense_list(&[rent.clone(), gas], "C$");

        assert!(output.contains(&rent.id.to_string()));
        assert!(output.contains("C$1200.00"));
        assert!(output.contains("pending"));
        assert!(output.contains("Transportation"));
    }

    #[test]
    fn test_details() {
        let rent = Expense::new("Rent", Money::from_cents(120_000), ExpenseGroup::Housing, "home");
        let output = format_expense_details(&rent, "$");
        assert!(output.contains("Expense: Rent"));
        assert!(output.contains(&rent.id.as_uuid().to_string()));
        assert!(output.contains("Housing"));
    }
}
