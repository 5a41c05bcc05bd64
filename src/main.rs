use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_buddy::cli::{
    handle_advise_command, handle_categories_command, handle_expense_command,
    handle_income_command, handle_spending_command, handle_suggest_command,
    handle_summary_command, ExpenseCommands, IncomeCommands,
};
use budget_buddy::config::{paths::BudgetPaths, settings::Settings, Currency, Language};
use budget_buddy::logging::init_tracing;
use budget_buddy::storage::open_file_ledger;
use budget_buddy::suggestions::Surface;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Monthly budget tracker with expense suggestions and budget advice",
    long_about = "Budget Buddy tracks a monthly income and your recurring expenses, \
                  shows what is left over, suggests expenses you may have forgotten, \
                  and gives rule-based advice on where to save."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense management commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Show income, expenses, and what is left over
    Summary,

    /// Show spending totals per group
    Spending,

    /// Show rule-based budget advice
    Advise,

    /// Suggest expenses that complement the ones you track
    Suggest {
        /// Where the suggestions are shown: inline or quick-add
        #[arg(short, long, default_value = "inline")]
        surface: Surface,
    },

    /// List known expense categories, optionally matching typed text
    Categories {
        /// Text to match against category names
        query: Option<String>,
    },

    /// Show or change configuration
    Config {
        /// Display currency (USD, EUR, GBP, CAD, AUD, NZD)
        #[arg(long)]
        currency: Option<Currency>,
        /// Interface language (en, es)
        #[arg(long)]
        language: Option<Language>,
        /// Dark mode preference
        #[arg(long)]
        dark_mode: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = BudgetPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level);

    // Initialize storage
    let ledger = open_file_ledger(&paths)?;

    match cli.command {
        Some(Commands::Income(cmd)) => handle_income_command(&ledger, &settings, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&ledger, &settings, cmd)?,
        Some(Commands::Summary) => handle_summary_command(&ledger, &settings)?,
        Some(Commands::Spending) => handle_spending_command(&ledger, &settings)?,
        Some(Commands::Advise) => handle_advise_command(&ledger, &settings)?,
        Some(Commands::Suggest { surface }) => handle_suggest_command(&ledger, surface)?,
        Some(Commands::Categories { query }) => handle_categories_command(query.as_deref())?,
        Some(Commands::Config {
            currency,
            language,
            dark_mode,
        }) => {
            if currency.is_some() || language.is_some() || dark_mode.is_some() {
                if let Some(currency) = currency {
                    settings.currency = currency;
                }
                if let Some(language) = language {
                    settings.language = language;
                }
                if let Some(dark_mode) = dark_mode {
                    settings.dark_mode = dark_mode;
                }
                settings.save(&paths)?;
                println!("Configuration saved.");
                println!();
            }

            println!("Budget Buddy Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency:  {} ({}, {})",
                settings.currency,
                settings.currency.symbol(),
                settings.currency.name()
            );
            println!("  Language:  {}", settings.language.code());
            println!("  Dark mode: {}", settings.dark_mode);
            println!("  Log level: {}", settings.log_level);
        }
        None => {
            println!("Budget Buddy - monthly budget tracking");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Start with 'budget income set <amount>'.");
        }
    }

    ledger.close();
    Ok(())
}
