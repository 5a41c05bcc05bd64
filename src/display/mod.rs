//! Display formatting for terminal output
//!
//! Plain-text tables and summaries. Amounts are printed with the currency
//! symbol from the user's settings.

pub mod budget;
pub mod expense;
pub mod suggestion;

pub use budget::{format_budget_summary, format_proportion_bar, format_spending_by_group};
pub use expense::{format_expense_details, format_expense_list};
pub use suggestion::{format_advisory, format_category_list, format_related};
