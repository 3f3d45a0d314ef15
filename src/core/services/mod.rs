//! Stateless services that make up the aggregation engine. Every function is
//! a pure transform over the slices it is handed.

pub mod category_service;
pub mod debt_service;
pub mod goal_service;
pub mod summary_service;
pub mod transaction_service;

pub use category_service::CategoryService;
pub use debt_service::DebtService;
pub use goal_service::GoalService;
pub use summary_service::SummaryService;
pub use transaction_service::TransactionService;

use crate::errors::{LedgerError, ValidationError};

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    Invalid(String),
}
