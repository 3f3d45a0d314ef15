#![doc(test(attr(deny(warnings))))]

//! Fintrack Core is the financial aggregation engine behind the dashboard:
//! it turns a user's transaction ledger, category budget goals and debts into
//! income/expense totals, per-category spend, goal progress, savings and net
//! worth.
//!
//! The engine itself ([`core::services`]) is a set of pure functions over
//! slices. [`core::FinanceManager`] wires it to a [`storage::RecordStore`]
//! for callers that want fetch-then-compute in one step.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::services::{
    CategoryService, DebtService, GoalService, SummaryService, TransactionService,
};
pub use crate::core::FinanceManager;
pub use errors::{LedgerError, ValidationError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            build = %utils::build_info::current().label(),
            "Fintrack Core tracing initialized."
        );
    });
}
