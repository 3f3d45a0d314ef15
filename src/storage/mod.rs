//! Record stores for transactions, goals, debts and reminders. The aggregation engine
//! never touches these directly; [`FinanceManager`](crate::core::FinanceManager)
//! fetches a snapshot and hands plain slices to the services.

pub mod json_backend;
pub mod memory;

use uuid::Uuid;

use crate::domain::{CategoryBudgetGoal, Debt, Reminder, Transaction, UserId};
use crate::errors::LedgerError;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends partitioned by user.
///
/// Concurrent writes resolve last-write-wins.
pub trait RecordStore: Send + Sync {
    fn insert_transaction(&self, transaction: Transaction) -> Result<()>;
    fn transactions(&self, owner: &UserId) -> Result<Vec<Transaction>>;
    /// Returns `false` when no transaction with `id` belongs to `owner`.
    fn delete_transaction(&self, owner: &UserId, id: Uuid) -> Result<bool>;

    fn replace_goals(&self, owner: &UserId, goals: Vec<CategoryBudgetGoal>) -> Result<()>;
    fn goals(&self, owner: &UserId) -> Result<Vec<CategoryBudgetGoal>>;

    fn insert_debt(&self, debt: Debt) -> Result<()>;
    fn debts(&self, owner: &UserId) -> Result<Vec<Debt>>;
    fn delete_debt(&self, owner: &UserId, id: Uuid) -> Result<bool>;

    fn insert_reminder(&self, reminder: Reminder) -> Result<()>;
    /// Insertion order; the manager sorts by date.
    fn reminders(&self, owner: &UserId) -> Result<Vec<Reminder>>;
    fn delete_reminder(&self, owner: &UserId, id: Uuid) -> Result<bool>;
}

pub use json_backend::JsonStore;
pub use memory::InMemoryStore;
