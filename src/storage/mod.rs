//! Storage layer for Trackify
//!
//! Each top-level collection (expenses, budgets) is persisted as one
//! independent text entry. The domain store talks to storage only through the
//! [`Repository`] port, so the backend can be swapped: JSON files on disk for
//! the CLI, an in-memory key/value store for tests and embedders.

pub mod file_io;
pub mod json;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json::JsonRepository;
pub use memory::{MemoryRepository, MemoryStore};

use crate::config::paths::TrackifyPaths;
use crate::error::TrackifyError;
use crate::models::{Budget, Expense};

/// Storage key of the expense collection
pub const EXPENSES_KEY: &str = "expenses";
/// Storage key of the budget collection
pub const BUDGETS_KEY: &str = "budgets";

/// Load/save port for one whole collection
pub trait Repository<T> {
    /// Read the full collection; an absent entry is an empty collection
    fn load(&self) -> Result<Vec<T>, TrackifyError>;

    /// Replace the stored collection with `items`
    fn save(&self, items: &[T]) -> Result<(), TrackifyError>;
}

/// Bundles the repositories for both collections
pub struct Storage {
    pub expenses: Box<dyn Repository<Expense>>,
    pub budgets: Box<dyn Repository<Budget>>,
}

impl Storage {
    /// Build storage from any pair of repositories
    pub fn new(
        expenses: Box<dyn Repository<Expense>>,
        budgets: Box<dyn Repository<Budget>>,
    ) -> Self {
        Self { expenses, budgets }
    }

    /// File-backed storage under the configured data directory
    ///
    /// Nothing is created on disk until the first save.
    pub fn open(paths: &TrackifyPaths) -> Self {
        Self::new(
            Box::new(JsonRepository::new(paths.expenses_file())),
            Box::new(JsonRepository::new(paths.budgets_file())),
        )
    }

    /// Storage backed by an in-memory text store
    pub fn in_memory(store: &MemoryStore) -> Self {
        Self::new(
            Box::new(MemoryRepository::new(store.clone(), EXPENSES_KEY)),
            Box::new(MemoryRepository::new(store.clone(), BUDGETS_KEY)),
        )
    }
}
