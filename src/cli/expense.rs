//! Expense CLI commands
//!
//! Add, edit, delete and browse expenses.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_categories, format_expense_details, format_expense_list, format_list_heading};
use crate::error::{TrackifyError, TrackifyResult};
use crate::models::ExpenseDraft;
use crate::reports::BudgetTracker;
use crate::services::ExpenseTracker;

use super::filter::{parse_amount, parse_date, FilterArgs};
use super::today;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount (e.g. "12.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Category label
        category: String,

        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Change fields of an existing expense
    Edit {
        /// Expense ID (full UUID, short id or UUID prefix)
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID (full UUID, short id or UUID prefix)
        id: String,
    },

    /// Show details of one expense
    Show {
        /// Expense ID (full UUID, short id or UUID prefix)
        id: String,
    },

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Maximum number of rows (defaults to the configured list limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List the distinct categories in use
    Categories,
}

/// Handle an expense command
pub fn handle_expense_command(
    tracker: &mut ExpenseTracker,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackifyResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => today(),
            };

            let expense = tracker.add_expense(ExpenseDraft::new(description, amount, category, date))?;

            println!("Added expense: {}", expense);
            println!("  ID: {}", expense.id);
            let budgets = BudgetTracker::compute(tracker.budgets(), tracker.expenses());
            if let Some(status) = budgets
                .statuses
                .iter()
                .find(|s| s.category == expense.category && s.is_exceeded())
            {
                println!(
                    "  Warning: '{}' is over budget ({} of {})",
                    status.category,
                    status.spent.format_with_symbol(symbol),
                    status.limit.format_with_symbol(symbol)
                );
            }
        }

        ExpenseCommands::Edit {
            id,
            description,
            amount,
            category,
            date,
        } => {
            let expense_id = tracker.resolve_expense(&id)?.id;

            let amount = amount.as_deref().map(parse_amount).transpose()?;
            let date = date.as_deref().map(parse_date).transpose()?;

            let Some(current) = tracker.begin_edit(expense_id) else {
                return Err(TrackifyError::expense_not_found(id));
            };
            let mut record = current.clone();

            if let Some(description) = description {
                record.description = description;
            }
            if let Some(amount) = amount {
                record.amount = amount;
            }
            if let Some(category) = category {
                record.category = category;
            }
            if let Some(date) = date {
                record.date = date;
            }

            if tracker.editing() == Some(&record) {
                tracker.cancel_edit();
                println!("No changes to make.");
                return Ok(());
            }

            if tracker.update_expense(record.clone())? {
                println!("Updated expense: {}", record);
            }
        }

        ExpenseCommands::Delete { id } => {
            let expense = tracker.resolve_expense(&id)?.clone();
            if tracker.delete_expense(expense.id)? {
                println!("Deleted expense: {}", expense);
            }
        }

        ExpenseCommands::Show { id } => {
            let expense = tracker.resolve_expense(&id)?;
            print!("{}", format_expense_details(expense, symbol));
        }

        ExpenseCommands::List { filter, limit } => {
            let filter = filter.to_filter()?;
            let visible = tracker.filtered(&filter);
            let limit = limit.unwrap_or(settings.list_limit);

            println!(
                "{}",
                format_list_heading("Expenses", visible.len(), tracker.expenses().len())
            );
            let shown: Vec<_> = visible.iter().take(limit).copied().collect();
            print!("{}", format_expense_list(&shown, symbol));
            if visible.len() > shown.len() {
                println!("... {} more (use --limit to show more)", visible.len() - shown.len());
            }
        }

        ExpenseCommands::Categories => {
            println!("Categories");
            print!("{}", format_categories(&tracker.categories()));
        }
    }

    Ok(())
}
