//! Expense tracker: the domain store
//!
//! Owns the authoritative expense and budget collections and the edit target.
//! Mutation methods are the only write path; each one that changes a
//! collection saves that collection through the storage port before
//! returning. Operations aimed at an id or category that does not exist are
//! silent no-ops.

use tracing::{debug, info};

use crate::error::{TrackifyError, TrackifyResult};
use crate::models::{Budget, Expense, ExpenseDraft, ExpenseId, Money};
use crate::services::filter::{distinct_categories, ExpenseFilter};
use crate::storage::Storage;

/// In-memory store of expenses and budgets backed by a [`Storage`]
pub struct ExpenseTracker {
    storage: Storage,
    expenses: Vec<Expense>,
    budgets: Vec<Budget>,
    editing: Option<Expense>,
}

impl ExpenseTracker {
    /// Read both collections from storage
    pub fn load(storage: Storage) -> TrackifyResult<Self> {
        let expenses = storage.expenses.load()?;
        let budgets = storage.budgets.load()?;
        debug!(
            expenses = expenses.len(),
            budgets = budgets.len(),
            "tracker loaded"
        );

        Ok(Self {
            storage,
            expenses,
            budgets,
            editing: None,
        })
    }

    /// All expenses, newest first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// All budgets in creation order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Expenses matching `filter`
    pub fn filtered(&self, filter: &ExpenseFilter) -> Vec<&Expense> {
        filter.apply(&self.expenses)
    }

    /// Distinct categories present across all expenses
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.expenses)
    }

    pub fn get_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn budget_for(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    /// Find an expense by full UUID, short display id or unique UUID prefix
    pub fn resolve_expense(&self, identifier: &str) -> TrackifyResult<&Expense> {
        let mut matches = self.expenses.iter().filter(|e| e.id.matches(identifier));

        match (matches.next(), matches.next()) {
            (Some(expense), None) => Ok(expense),
            (None, _) => Err(TrackifyError::expense_not_found(identifier)),
            (Some(_), Some(_)) => Err(TrackifyError::Validation(format!(
                "Identifier '{}' matches more than one expense",
                identifier
            ))),
        }
    }

    /// Record a new expense; it becomes the first element of the collection
    pub fn add_expense(&mut self, draft: ExpenseDraft) -> TrackifyResult<Expense> {
        draft
            .validate()
            .map_err(|e| TrackifyError::Validation(e.to_string()))?;

        let expense = Expense::from_draft(draft);
        self.expenses.insert(0, expense.clone());
        self.save_expenses()?;

        info!(id = %expense.id, category = %expense.category, "expense added");
        Ok(expense)
    }

    /// Replace the expense with the same id; returns whether one was replaced
    ///
    /// The edit target is cleared whether or not a record matched.
    pub fn update_expense(&mut self, record: Expense) -> TrackifyResult<bool> {
        record
            .validate()
            .map_err(|e| TrackifyError::Validation(e.to_string()))?;

        self.editing = None;

        let Some(slot) = self.expenses.iter_mut().find(|e| e.id == record.id) else {
            debug!(id = %record.id, "update ignored, no such expense");
            return Ok(false);
        };

        let id = record.id;
        *slot = record;
        self.save_expenses()?;

        info!(id = %id, "expense updated");
        Ok(true)
    }

    /// Remove the expense with `id`; returns whether one was removed
    pub fn delete_expense(&mut self, id: ExpenseId) -> TrackifyResult<bool> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            debug!(id = %id, "delete ignored, no such expense");
            return Ok(false);
        }

        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            self.editing = None;
        }
        self.save_expenses()?;

        info!(id = %id, "expense deleted");
        Ok(true)
    }

    /// Set the limit for `category`, creating the budget if needed
    ///
    /// An existing budget keeps its position in the collection.
    pub fn update_budget(&mut self, category: &str, limit: Money) -> TrackifyResult<()> {
        if category.trim().is_empty() {
            return Err(TrackifyError::Validation(
                "Budget category cannot be empty".into(),
            ));
        }
        if limit.is_negative() {
            return Err(TrackifyError::Validation(format!(
                "Budget limit cannot be negative: {}",
                limit
            )));
        }

        match self.budgets.iter_mut().find(|b| b.category == category) {
            Some(budget) => budget.limit = limit,
            None => self.budgets.push(Budget::new(category, limit)),
        }
        self.save_budgets()?;

        info!(category, limit = %limit, "budget set");
        Ok(())
    }

    /// Remove the budget for `category`; returns whether one was removed
    pub fn delete_budget(&mut self, category: &str) -> TrackifyResult<bool> {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.category != category);
        if self.budgets.len() == before {
            debug!(category, "budget delete ignored, no such budget");
            return Ok(false);
        }

        self.save_budgets()?;
        info!(category, "budget deleted");
        Ok(true)
    }

    /// Open the expense with `id` for editing
    pub fn begin_edit(&mut self, id: ExpenseId) -> Option<&Expense> {
        let expense = self.get_expense(id)?.clone();
        self.editing = Some(expense);
        self.editing.as_ref()
    }

    /// Drop the edit target without changing anything
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// The expense currently open for editing
    pub fn editing(&self) -> Option<&Expense> {
        self.editing.as_ref()
    }

    /// Write both collections as they are
    pub fn persist(&self) -> TrackifyResult<()> {
        self.save_expenses()?;
        self.save_budgets()
    }

    fn save_expenses(&self) -> TrackifyResult<()> {
        self.storage.expenses.save(&self.expenses)
    }

    fn save_budgets(&self) -> TrackifyResult<()> {
        self.storage.budgets.save(&self.budgets)
    }
}
