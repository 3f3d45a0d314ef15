use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

use uuid::Uuid;

use crate::core::utils::{app_data_dir, ensure_dir, records_dir_in, write_atomic};
use crate::domain::{CategoryBudgetGoal, Debt, Owned, Reminder, Transaction, UserId};
use crate::errors::LedgerError;

use super::memory::UserRecords;
use super::{RecordStore, Result};

const RECORD_EXTENSION: &str = "json";

/// File-backed store keeping one JSON document per user.
///
/// Writes are staged to a temporary file and renamed into place. Within one
/// process a lock serialises read-modify-write cycles.
#[derive(Debug)]
pub struct JsonStore {
    root: PathBuf,
    lock: Mutex<()>,
}

impl JsonStore {
    /// Opens a store rooted at `root`, or at `<data dir>/records` when `None`.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(|| records_dir_in(&app_data_dir()));
        ensure_dir(&root)?;
        Ok(Self {
            root,
            lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn user_path(&self, owner: &UserId) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(owner), RECORD_EXTENSION))
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| LedgerError::Persistence("json store lock poisoned".into()))
    }

    fn load(&self, owner: &UserId) -> Result<UserRecords> {
        let path = self.user_path(owner);
        if !path.exists() {
            return Ok(UserRecords::default());
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, owner: &UserId, records: &UserRecords) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        write_atomic(&self.user_path(owner), &json)?;
        tracing::debug!(owner = %owner, "saved user records");
        Ok(())
    }

    fn update<T, F>(&self, owner: &UserId, mutator: F) -> Result<T>
    where
        F: FnOnce(&mut UserRecords) -> T,
    {
        let _guard = self.guard()?;
        let mut records = self.load(owner)?;
        let outcome = mutator(&mut records);
        self.save(owner, &records)?;
        Ok(outcome)
    }

    fn read<T, F>(&self, owner: &UserId, reader: F) -> Result<T>
    where
        F: FnOnce(UserRecords) -> T,
    {
        let _guard = self.guard()?;
        Ok(reader(self.load(owner)?))
    }
}

impl RecordStore for JsonStore {
    fn insert_transaction(&self, transaction: Transaction) -> Result<()> {
        let owner = transaction.owner().clone();
        self.update(&owner, |records| records.transactions.push(transaction))
    }

    fn transactions(&self, owner: &UserId) -> Result<Vec<Transaction>> {
        self.read(owner, |records| records.transactions)
    }

    fn delete_transaction(&self, owner: &UserId, id: Uuid) -> Result<bool> {
        self.update(owner, |records| records.remove_transaction(id))
    }

    fn replace_goals(&self, owner: &UserId, goals: Vec<CategoryBudgetGoal>) -> Result<()> {
        self.update(owner, |records| records.goals = goals)
    }

    fn goals(&self, owner: &UserId) -> Result<Vec<CategoryBudgetGoal>> {
        self.read(owner, |records| records.goals)
    }

    fn insert_debt(&self, debt: Debt) -> Result<()> {
        let owner = debt.owner().clone();
        self.update(&owner, |records| records.debts.push(debt))
    }

    fn debts(&self, owner: &UserId) -> Result<Vec<Debt>> {
        self.read(owner, |records| records.debts)
    }

    fn delete_debt(&self, owner: &UserId, id: Uuid) -> Result<bool> {
        self.update(owner, |records| records.remove_debt(id))
    }

    fn insert_reminder(&self, reminder: Reminder) -> Result<()> {
        let owner = reminder.owner().clone();
        self.update(&owner, |records| records.reminders.push(reminder))
    }

    fn reminders(&self, owner: &UserId) -> Result<Vec<Reminder>> {
        self.read(owner, |records| records.reminders)
    }

    fn delete_reminder(&self, owner: &UserId, id: Uuid) -> Result<bool> {
        self.update(owner, |records| records.remove_reminder(id))
    }
}

/// Injective, filesystem-safe file stem for a user id. Lowercase ASCII
/// letters, digits and `-` pass through; every other byte becomes `_xx`.
fn canonical_name(owner: &UserId) -> String {
    let mut name = String::with_capacity(owner.as_str().len());
    for byte in owner.as_str().bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' => name.push(byte as char),
            other => {
                let _ = write!(name, "_{:02x}", other);
            }
        }
    }
    if name.is_empty() {
        name.push('_');
    }
    name
}
