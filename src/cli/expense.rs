//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_expense_details, format_expense_list};
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::services::{ExpenseService, ExpenseUpdate, NewExpense};
use crate::storage::Ledger;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense name (catalog names are recognized, e.g. "rent")
        name: String,
        /// Monthly amount (e.g., "150" or "150.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Spending group (housing, food, transportation, ...)
        #[arg(short, long)]
        category: Option<String>,
        /// Icon identifier
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// List expenses, most recent first
    List,

    /// Show expense details
    Show {
        /// Expense ID (full UUID or exp-xxxxxxxx)
        id: String,
    },

    /// Update an expense
    Update {
        /// Expense ID (full UUID or exp-xxxxxxxx)
        id: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New spending group
        #[arg(short, long)]
        category: Option<String>,
        /// New icon identifier
        #[arg(short, long)]
        icon: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID or exp-xxxxxxxx)
        id: String,
    },

    /// Add a suggested expense by catalog key, to be priced later
    Suggest {
        /// Catalog key (e.g., "gym membership")
        key: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let symbol = settings.currency_symbol();
    let service = ExpenseService::new(ledger);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            icon,
        } => {
            let input = NewExpense {
                name,
                amount: Money::parse(&amount)?,
                category,
                icon,
            };
            let expense = service.add(input)?;
            println!(
                "Added {} ({}) for {}",
                expense.name,
                expense.id,
                expense.amount.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::List => {
            let expenses = service.list()?;
            println!("{}", format_expense_list(&expenses, symbol).trim_end());
        }

        ExpenseCommands::Show { id } => {
            let id = service.find_id(&id)?;
            match service.get(id)? {
                Some(expense) => print!("{}", format_expense_details(&expense, symbol)),
                None => return Err(BudgetError::expense_not_found(id.to_string())),
            }
        }

        ExpenseCommands::Update {
            id,
            name,
            amount,
            category,
            icon,
        } => {
            let id = service.find_id(&id)?;
            let update = ExpenseUpdate {
                name,
                amount: amount.as_deref().map(Money::parse).transpose()?,
                category,
                icon,
            };

            if update.is_empty() {
                println!("Nothing to update. Pass --name, --amount, --category or --icon.");
                return Ok(());
            }

            let expense = service.update(id, update)?;
            println!(
                "Updated {} ({}): {}",
                expense.name,
                expense.id,
                expense.amount.format_with_symbol(symbol)
            );
        }

        ExpenseCommands::Delete { id } => {
            let removed = match service.find_id(&id) {
                Ok(id) => service.delete(id)?,
                Err(e) if e.is_not_found() => false,
                Err(e) => return Err(e),
            };

            if removed {
                println!("Deleted expense {}", id);
            } else {
                println!("No expense {} to delete", id);
            }
        }

        ExpenseCommands::Suggest { key } => {
            let expense = service.add_pending(&key)?;
            println!(
                "Added {} ({}) as pending. Set its amount with \
                 'budget expense update {} --amount <amount>'.",
                expense.name, expense.id, expense.id
            );
        }
    }

    Ok(())
}
