//! Income CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::BudgetResult;
use crate::services::{BudgetService, IncomeService};
use crate::storage::Ledger;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Set the monthly income
    Set {
        /// Income amount (e.g., "5000" or "5000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the monthly income
    Show,
}

/// Handle an income command
pub fn handle_income_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol();
    let income_service = IncomeService::new(ledger);

    match cmd {
        IncomeCommands::Set { amount } => {
            let income = income_service.set_income_from_str(&amount)?;
            println!(
                "Monthly income set to {}",
                income.amount.format_with_symbol(symbol)
            );

            let snapshot = BudgetService::new(ledger).snapshot()?;
            if snapshot.expense_count > 0 {
                println!(
                    "Remaining after expenses: {}",
                    snapshot.remaining.format_with_symbol(symbol)
                );
            }
        }

        IncomeCommands::Show => {
            let record = income_service.get_income_record()?;
            if record.is_set() {
                println!(
                    "Monthly income: {}",
                    record.amount.format_with_symbol(symbol)
                );
            } else {
                println!("No income set yet.");
                println!("Use 'budget income set <amount>' to set your monthly income.");
            }
        }
    }

    Ok(())
}
