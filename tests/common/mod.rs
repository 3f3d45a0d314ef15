#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{TimeZone, Utc};
use fintrack_core::{
    config::ConfigManager,
    core::FinanceManager,
    domain::{Category, CategoryBudgetGoal, Debt, Transaction, UserId},
    storage::JsonStore,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Creates a JSON-backed manager rooted in a unique directory.
pub fn setup_json_manager() -> (FinanceManager, ConfigManager) {
    let base = temp_base();
    let configs = ConfigManager::with_base_dir(base).expect("create config manager");
    let manager = FinanceManager::open(&configs).expect("open finance manager");
    (manager, configs)
}

/// Fresh JSON store in its own directory.
pub fn json_store() -> JsonStore {
    JsonStore::new(Some(temp_base().join("records"))).expect("create json store")
}

pub fn user() -> UserId {
    UserId::new("64f0c2a9e1b2c3d4e5f60718")
}

pub fn txn(amount: f64, category: Category) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        owner: user(),
        title: format!("{category} entry"),
        amount,
        category,
        note: String::new(),
        tags: Vec::new(),
        date: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
    }
}

pub fn goal(category: Category, amount: f64) -> CategoryBudgetGoal {
    CategoryBudgetGoal::new(user(), category, amount)
}

pub fn debt(name: &str, amount: f64) -> Debt {
    Debt::new(user(), name, amount)
}

/// The ledger from the dashboard walkthrough: salary, groceries and a trip.
pub fn scenario_ledger() -> Vec<Transaction> {
    vec![
        txn(5000.0, Category::Income),
        txn(-1200.0, Category::Food),
        txn(-300.0, Category::Travel),
    ]
}
