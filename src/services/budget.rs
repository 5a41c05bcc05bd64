//! Budget service
//!
//! Read-side facade over the ledger: the derived snapshot, spending by
//! group, and both suggestion generators. Nothing here is stored; every
//! call recomputes from the current income and expenses.

use crate::error::BudgetResult;
use crate::models::{Expense, Money};
use crate::reports::{spending_by_group, BudgetSnapshot, GroupTotal};
use crate::storage::Ledger;
use crate::suggestions::{related_expenses, Advisor, AdvisoryItem, Suggestion, Surface};
use crate::taxonomy::{self, ExpenseCategory};

/// Service for derived budget views
pub struct BudgetService<'a> {
    ledger: &'a Ledger,
    advisor: Advisor,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service formatting advice in dollars
    pub fn new(ledger: &'a Ledger) -> Self {
        Self {
            ledger,
            advisor: Advisor::default(),
        }
    }

    /// Format amounts in advice with a different currency symbol
    pub fn with_currency_symbol(mut self, symbol: &str) -> Self {
        self.advisor = Advisor::new(symbol);
        self
    }

    fn current(&self) -> BudgetResult<(Money, Vec<Expense>)> {
        Ok((self.ledger.income()?.amount, self.ledger.expenses()?))
    }

    /// Totals, remaining balance, percentages, and status
    pub fn snapshot(&self) -> BudgetResult<BudgetSnapshot> {
        let (income, expenses) = self.current()?;
        Ok(BudgetSnapshot::compute(income, &expenses))
    }

    /// Spending per group in first-seen order
    pub fn spending_by_group(&self) -> BudgetResult<Vec<GroupTotal>> {
        Ok(spending_by_group(&self.ledger.expenses()?))
    }

    /// Rule-based advice for the current budget
    pub fn advisory_suggestions(&self) -> BudgetResult<Vec<AdvisoryItem>> {
        let (income, expenses) = self.current()?;
        Ok(self.advisor.advise(income, &expenses))
    }

    /// Catalog entries worth adding on the given surface
    pub fn related_expense_suggestions(
        &self,
        surface: Surface,
    ) -> BudgetResult<Vec<&'static ExpenseCategory>> {
        let expenses = self.ledger.expenses()?;
        Ok(related_expenses(&expenses, surface)
            .into_iter()
            .filter_map(taxonomy::lookup)
            .collect())
    }

    /// Related expenses followed by advice
    pub fn suggestions(&self, surface: Surface) -> BudgetResult<Vec<Suggestion>> {
        let mut suggestions: Vec<Suggestion> = self
            .related_expense_suggestions(surface)?
            .into_iter()
            .map(Suggestion::from)
            .collect();
        suggestions.extend(self.advisory_suggestions()?.into_iter().map(Suggestion::from));
        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ExpenseService, IncomeService, NewExpense};
    use crate::suggestions::Severity;

    fn dollars(d: i64) -> Money {
        Money::from_dollars_cents(d, 0)
    }

    #[test]
    fn test_snapshot_reflects_mutations() {
        let ledger = Ledger::in_memory();
        IncomeService::new(&ledger).set_income(dollars(4000)).unwrap();
        let expenses = ExpenseService::new(&ledger);
        let rent = expenses.add(NewExpense::new("Rent", dollars(1500))).unwrap();

        let service = BudgetService::new(&ledger);
        let snapshot = service.snapshot().unwrap();
        assert_eq!(snapshot.remaining, dollars(2500));
        assert_eq!(snapshot, service.snapshot().unwrap());

        expenses.delete(rent.id).unwrap();
        assert_eq!(service.snapshot().unwrap().remaining, dollars(4000));
    }

    #[test]
    fn test_related_suggestions_resolve_to_categories() {
        let ledger = Ledger::in_memory();
        ExpenseService::new(&ledger)
            .add(NewExpense::new("Netflix", dollars(15)))
            .unwrap();

        let related = BudgetService::new(&ledger)
            .related_expense_suggestions(Surface::Inline)
            .unwrap();
        let names: Vec<_> = related.iter().map(|c| c.display_name).collect();
        assert_eq!(names, vec!["Spotify", "Cable/TV", "Internet"]);
    }

    #[test]
    fn test_advice_uses_currency_symbol() {
        let ledger = Ledger::in_memory();
        IncomeService::new(&ledger).set_income(dollars(1000)).unwrap();
        ExpenseService::new(&ledger)
            .add(NewExpense::new("Rent", dollars(1200)))
            .unwrap();

        let advice = BudgetService::new(&ledger)
            .with_currency_symbol("€")
            .advisory_suggestions()
            .unwrap();
        assert_eq!(advice[0].severity, Severity::Warning);
        assert!(advice[0].message.contains("€200.00"));
    }

    #[test]
    fn test_suggestions_combine_both_generators() {
        let ledger = Ledger::in_memory();
        IncomeService::new(&ledger).set_income(dollars(5000)).unwrap();

        let suggestions = BudgetService::new(&ledger)
            .suggestions(Surface::Inline)
            .unwrap();
        let related = suggestions
            .iter()
            .filter(|s| matches!(s, Suggestion::RelatedExpense { .. }))
            .count();
        assert_eq!(related, 4);
        assert_eq!(suggestions.len() - related, 4);
    }
}
