//! Spending by group
//!
//! Totals per spending group for the chart view.

use serde::Serialize;

use crate::models::{Expense, ExpenseGroup, Money};

/// Spending for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal {
    pub group: ExpenseGroup,
    pub total: Money,
    pub expense_count: usize,
    /// Share of all spending; 0 when nothing has been spent
    pub percentage: f64,
}

/// Group totals in the order each group is first seen in `expenses`
pub fn spending_by_group(expenses: &[Expense]) -> Vec<GroupTotal> {
    let mut totals: Vec<GroupTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.group == expense.category) {
            Some(total) => {
                total.total += expense.amount;
                total.expense_count += 1;
            }
            None => totals.push(GroupTotal {
                group: expense.category,
                total: expense.amount,
                expense_count: 1,
                percentage: 0.0,
            }),
        }
    }

    let grand_total: Money = totals.iter().map(|t| t.total).sum();
    for total in &mut totals {
        total.percentage = total.total.percent_of(grand_total);
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(name: &str, cents: i64, group: ExpenseGroup) -> Expense {
        Expense::new(name, Money::from_cents(cents), group, "cash")
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let expenses = vec![
            expense("Groceries", 40_000, ExpenseGroup::Food),
            expense("Rent", 150_000, ExpenseGroup::Housing),
            expense("Coffee", 10_000, ExpenseGroup::Food),
        ];

        let totals = spending_by_group(&expenses);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].group, ExpenseGroup::Food);
        assert_eq!(totals[0].total.cents(), 50_000);
        assert_eq!(totals[0].expense_count, 2);
        assert_eq!(totals[1].group, ExpenseGroup::Housing);
        assert!((totals[0].percentage - 25.0).abs() < 1e-9);
        assert!((totals[1].percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_pending_has_zero_percentages() {
        let totals = spending_by_group(&[expense("Gas", 0, ExpenseGroup::Transportation)]);
        assert_eq!(totals[0].percentage, 0.0);
    }

    #[test]
    fn test_empty() {
        assert!(spending_by_group(&[]).is_empty());
    }
}
