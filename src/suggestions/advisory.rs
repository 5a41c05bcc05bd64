//! Rule-based budget advice
//!
//! A fixed rule table evaluated in order over the budget snapshot and a
//! couple of name patterns. Rules are independent: several can fire for the
//! same budget. Evaluation is synchronous and deterministic.

use serde::Serialize;
use std::fmt;

use crate::models::{Expense, Money};
use crate::reports::{BudgetSnapshot, BudgetStatus};

/// Gym spend above this triggers the cheaper-gym rule
const GYM_THRESHOLD: Money = Money::from_cents(10_000);
/// Monthly price of the suggested budget gym
const BUDGET_GYM_PRICE: Money = Money::from_cents(1_000);
/// Eating-out spend above this triggers the meal-prep rule
const EATING_OUT_THRESHOLD: Money = Money::from_cents(20_000);
/// Share of eating-out spend meal prep is expected to save
const MEAL_PREP_SAVINGS_PERCENT: u32 = 30;
/// Remaining share of income above which investing is suggested
const INVESTMENT_REMAINING_PERCENT: i128 = 20;

/// How an advisory item should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Caution,
    Warning,
    Alternative,
    Opportunity,
    Tip,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Info => "info",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Alternative => "alternative",
            Self::Opportunity => "opportunity",
            Self::Tip => "tip",
        };
        write!(f, "{}", label)
    }
}

/// One recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisoryItem {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub icon: &'static str,
    /// Estimated monthly saving if the advice is followed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projected_monthly_savings: Option<Money>,
}

impl AdvisoryItem {
    fn new(severity: Severity, title: &str, message: String, icon: &'static str) -> Self {
        Self {
            severity,
            title: title.to_string(),
            message,
            icon,
            projected_monthly_savings: None,
        }
    }

    fn with_savings(mut self, savings: Money) -> Self {
        self.projected_monthly_savings = Some(savings);
        self
    }
}

/// Evaluates the advice rules, formatting amounts with a currency symbol
#[derive(Debug, Clone)]
pub struct Advisor {
    currency_symbol: String,
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new("$")
    }
}

impl Advisor {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }

    fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    /// Run every rule against the income and expenses, in table order
    pub fn advise(&self, income: Money, expenses: &[Expense]) -> Vec<AdvisoryItem> {
        let snapshot = BudgetSnapshot::compute(income, expenses);
        let mut items = Vec::new();

        if expenses.is_empty() {
            items.extend(self.onboarding(income));
        }

        match snapshot.status {
            BudgetStatus::Deficit => items.push(AdvisoryItem::new(
                Severity::Warning,
                "Budget Deficit",
                format!(
                    "You're overspending by {}. Consider reducing discretionary expenses.",
                    self.money(snapshot.remaining.abs())
                ),
                "alert-circle",
            )),
            BudgetStatus::LowSavings => items.push(AdvisoryItem::new(
                Severity::Caution,
                "Low Savings Rate",
                format!(
                    "Only {} left for savings. Aim for 20% of income.",
                    self.money(snapshot.remaining)
                ),
                "piggy-bank",
            )),
            BudgetStatus::Surplus | BudgetStatus::OnTrack => {}
        }

        if let Some(gym) = find_named(expenses, "gym", GYM_THRESHOLD) {
            items.push(
                AdvisoryItem::new(
                    Severity::Alternative,
                    "Gym Alternative",
                    format!(
                        "Consider a budget gym ({}/month) instead of your current \
                         {}/month membership.",
                        self.money(BUDGET_GYM_PRICE),
                        self.money(gym.amount)
                    ),
                    "dumbbell",
                )
                .with_savings(gym.amount - BUDGET_GYM_PRICE),
            );
        }

        if let Some(eating_out) = find_named(expenses, "eating out", EATING_OUT_THRESHOLD) {
            let savings = eating_out.amount.percent(MEAL_PREP_SAVINGS_PERCENT);
            items.push(
                AdvisoryItem::new(
                    Severity::Tip,
                    "Meal Planning",
                    format!(
                        "Reduce eating out by meal prepping. Could save {}/month.",
                        self.money(savings)
                    ),
                    "food",
                )
                .with_savings(savings),
            );
        }

        // Independent of the 50% surplus status threshold.
        let remaining = i128::from(snapshot.remaining.cents());
        let income_cents = i128::from(income.cents());
        if remaining * 100 > income_cents * INVESTMENT_REMAINING_PERCENT {
            items.push(AdvisoryItem::new(
                Severity::Opportunity,
                "Investment Opportunity",
                format!(
                    "Great job! You have {} extra. Consider investing in an index fund.",
                    self.money(snapshot.remaining)
                ),
                "trending-up",
            ));
        }

        items
    }

    fn onboarding(&self, income: Money) -> [AdvisoryItem; 3] {
        [
            AdvisoryItem::new(
                Severity::Info,
                "Start Your Budget Journey",
                format!(
                    "With a monthly income of {}, you have great potential! Start by tracking \
                     your essential expenses like rent, utilities, and groceries.",
                    self.money(income)
                ),
                "rocket-launch",
            ),
            AdvisoryItem::new(
                Severity::Tip,
                "50/30/20 Rule",
                "Try the 50/30/20 budgeting rule: 50% for needs, 30% for wants, and 20% for \
                 savings and debt repayment."
                    .to_string(),
                "chart-pie",
            ),
            AdvisoryItem::new(
                Severity::Tip,
                "Emergency Fund",
                format!(
                    "Aim to save 3-6 months of expenses in an emergency fund. Start with just \
                     {}-{} per month.",
                    self.money(Money::from_cents(5_000)),
                    self.money(Money::from_cents(10_000))
                ),
                "shield-check",
            ),
        ]
    }
}

/// First expense whose name contains `pattern` and whose amount exceeds `threshold`
fn find_named<'a>(expenses: &'a [Expense], pattern: &str, threshold: Money) -> Option<&'a Expense> {
    expenses
        .iter()
        .find(|e| e.name.to_lowercase().contains(pattern) && e.amount > threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseGroup, DEFAULT_ICON};

    fn expense(name: &str, cents: i64) -> Expense {
        Expense::new(name, Money::from_cents(cents), ExpenseGroup::Other, DEFAULT_ICON)
    }

    fn titles(items: &[AdvisoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_empty_budget_onboarding_plus_investment() {
        let items = Advisor::default().advise(Money::from_cents(500_000), &[]);
        assert_eq!(
            titles(&items),
            vec![
                "Start Your Budget Journey",
                "50/30/20 Rule",
                "Emergency Fund",
                "Investment Opportunity"
            ]
        );
        assert!(items[0].message.contains("$5000.00"));
        assert!(items[3].message.contains("$5000.00"));

        let severities: Vec<_> = items.iter().map(|i| i.severity).collect();
        assert_eq!(
            severities,
            vec![Severity::Info, Severity::Tip, Severity::Tip, Severity::Opportunity]
        );
    }

    #[test]
    fn test_zero_income_empty_budget_is_onboarding_only() {
        let items = Advisor::default().advise(Money::zero(), &[]);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_deficit_warning() {
        let items = Advisor::default().advise(
            Money::from_cents(100_000),
            &[expense("Rent", 120_000)],
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].severity, Severity::Warning);
        assert!(items[0].message.contains("$200.00"));
    }

    #[test]
    fn test_low_savings_caution() {
        let items = Advisor::default().advise(
            Money::from_cents(100_000),
            &[expense("Rent", 95_000)],
        );
        assert_eq!(titles(&items), vec!["Low Savings Rate"]);
        assert_eq!(items[0].severity, Severity::Caution);
        assert!(items[0].message.contains("$50.00"));
    }

    #[test]
    fn test_gym_alternative() {
        let items = Advisor::default().advise(
            Money::from_cents(200_000),
            &[expense("Gym Membership", 15_000)],
        );
        assert_eq!(titles(&items), vec!["Gym Alternative", "Investment Opportunity"]);
        assert_eq!(items[0].severity, Severity::Alternative);
        assert_eq!(items[0].projected_monthly_savings, Some(Money::from_cents(14_000)));
    }

    #[test]
    fn test_cheap_gym_is_fine() {
        let items = Advisor::default().advise(
            Money::from_cents(200_000),
            &[expense("Cheap gym", 10_000)],
        );
        assert!(!titles(&items).contains(&"Gym Alternative"));
    }

    #[test]
    fn test_meal_planning() {
        let items = Advisor::default().advise(
            Money::from_cents(300_000),
            &[expense("Eating Out", 25_000)],
        );
        let meal = items.iter().find(|i| i.title == "Meal Planning").unwrap();
        assert_eq!(meal.severity, Severity::Tip);
        assert_eq!(meal.projected_monthly_savings, Some(Money::from_cents(7_500)));
        assert!(meal.message.contains("$75.00"));
    }

    #[test]
    fn test_investment_threshold_is_twenty_percent() {
        // 30% remaining: on track, but still above the investment threshold
        let items = Advisor::default().advise(
            Money::from_cents(100_000),
            &[expense("Rent", 70_000)],
        );
        assert_eq!(titles(&items), vec!["Investment Opportunity"]);

        // exactly 20% remaining does not qualify
        let items = Advisor::default().advise(
            Money::from_cents(100_000),
            &[expense("Rent", 80_000)],
        );
        assert!(items.is_empty());
    }

    #[test]
    fn test_currency_symbol() {
        let items = Advisor::new("€").advise(
            Money::from_cents(100_000),
            &[expense("Rent", 120_000)],
        );
        assert!(items[0].message.contains("€200.00"));
    }
}
