//! Budget CLI commands
//!
//! Set, remove and review per-category spending limits.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrackifyError, TrackifyResult};
use crate::reports::BudgetTracker;
use crate::services::ExpenseTracker;

use super::filter::parse_amount;

const BAR_WIDTH: usize = 30;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the spending limit of a category
    Set {
        /// Category name
        category: String,

        /// Limit amount (e.g. "300")
        limit: String,
    },

    /// Remove the budget of a category
    #[command(alias = "rm")]
    Delete {
        /// Category name
        category: String,
    },

    /// Show every budget with its spend
    #[command(alias = "ls")]
    List,
}

/// Handle a budget command
pub fn handle_budget_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackifyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let limit = parse_amount(&limit)?;
            let existed = tracker.budget_for(&category).is_some();
            tracker.update_budget(&category, limit)?;

            if existed {
                println!("Updated budget: {} -> {}", category, limit.format_with_symbol(symbol));
            } else {
                println!("Created budget: {} -> {}", category, limit.format_with_symbol(symbol));
            }
        }

        BudgetCommands::Delete { category } => {
            if !tracker.delete_budget(&category)? {
                return Err(TrackifyError::budget_not_found(category));
            }
            println!("Deleted budget: {}", category);
        }

        BudgetCommands::List => {
            let report = BudgetTracker::compute(tracker.budgets(), tracker.expenses());
            print!("{}", report.format_terminal(symbol, BAR_WIDTH));

            let unbudgeted = report.unbudgeted_categories(&tracker.categories());
            if !report.statuses.is_empty() && !unbudgeted.is_empty() {
                println!();
                println!("Categories without a budget: {}", unbudgeted.join(", "));
            }
        }
    }

    Ok(())
}
