pub mod category;
pub mod common;
pub mod debt;
pub mod goal;
pub mod reminder;
pub mod summary;
pub mod transaction;

pub use category::Category;
pub use common::{Amounted, Identifiable, Owned, UserId};
pub use debt::Debt;
pub use goal::CategoryBudgetGoal;
pub use reminder::Reminder;
pub use summary::{
    BudgetHealth, CategoryShare, CategorySpend, DerivedSummary, FilteredTransactions,
    GoalProgress, GoalReconciliation, SummaryPolicy, TransactionSummary,
};
pub use transaction::{RawTransaction, Transaction};
