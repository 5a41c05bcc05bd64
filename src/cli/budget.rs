//! Budget CLI commands
//!
//! Read-only views: the summary, spending by group, advice, related-expense
//! suggestions, and the category catalog.

use crate::config::settings::Settings;
use crate::display::{
    format_advisory, format_budget_summary, format_category_list, format_related,
    format_spending_by_group,
};
use crate::error::BudgetResult;
use crate::services::BudgetService;
use crate::storage::Ledger;
use crate::suggestions::Surface;
use crate::taxonomy;

/// Print the budget summary
pub fn handle_summary_command(ledger: &Ledger, settings: &Settings) -> BudgetResult<()> {
    let snapshot = BudgetService::new(ledger).snapshot()?;
    print!("{}", format_budget_summary(&snapshot, settings.currency_symbol()));
    Ok(())
}

/// Print spending grouped by category group
pub fn handle_spending_command(ledger: &Ledger, settings: &Settings) -> BudgetResult<()> {
    let totals = BudgetService::new(ledger).spending_by_group()?;
    println!("{}", format_spending_by_group(&totals, settings.currency_symbol()).trim_end());
    Ok(())
}

/// Print rule-based advice
pub fn handle_advise_command(ledger: &Ledger, settings: &Settings) -> BudgetResult<()> {
    let symbol = settings.currency_symbol();
    let items = BudgetService::new(ledger)
        .with_currency_symbol(symbol)
        .advisory_suggestions()?;
    println!("{}", format_advisory(&items, symbol).trim_end());
    Ok(())
}

/// Print related-expense suggestions for a surface
pub fn handle_suggest_command(ledger: &Ledger, surface: Surface) -> BudgetResult<()> {
    let related = BudgetService::new(ledger).related_expense_suggestions(surface)?;
    println!("{}", format_related(&related).trim_end());
    Ok(())
}

/// List catalog entries, optionally filtered by typed text
pub fn handle_categories_command(query: Option<&str>) -> BudgetResult<()> {
    let categories: Vec<_> = match query {
        Some(text) => taxonomy::autocomplete(text),
        None => taxonomy::all().iter().collect(),
    };
    println!("{}", format_category_list(&categories).trim_end());
    Ok(())
}
