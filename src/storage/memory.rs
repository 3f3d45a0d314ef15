use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    CategoryBudgetGoal, Debt, Identifiable, Owned, Reminder, Transaction, UserId,
};
use crate::errors::LedgerError;

use super::{RecordStore, Result};

/// Everything stored for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecords {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub goals: Vec<CategoryBudgetGoal>,
    #[serde(default)]
    pub debts: Vec<Debt>,
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl UserRecords {
    pub(crate) fn remove_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|txn| txn.id() != id);
        self.transactions.len() != before
    }

    pub(crate) fn remove_debt(&mut self, id: Uuid) -> bool {
        let before = self.debts.len();
        self.debts.retain(|debt| debt.id() != id);
        self.debts.len() != before
    }

    pub(crate) fn remove_reminder(&mut self, id: Uuid) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|reminder| reminder.id() != id);
        self.reminders.len() != before
    }
}

/// Process-local store, mainly for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<UserId, UserRecords>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, HashMap<UserId, UserRecords>>> {
        self.users
            .read()
            .map_err(|_| LedgerError::Persistence("record store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<UserId, UserRecords>>> {
        self.users
            .write()
            .map_err(|_| LedgerError::Persistence("record store lock poisoned".into()))
    }
}

impl RecordStore for InMemoryStore {
    fn insert_transaction(&self, transaction: Transaction) -> Result<()> {
        let mut users = self.write()?;
        users
            .entry(transaction.owner().clone())
            .or_default()
            .transactions
            .push(transaction);
        Ok(())
    }

    fn transactions(&self, owner: &UserId) -> Result<Vec<Transaction>> {
        Ok(self
            .read()?
            .get(owner)
            .map(|records| records.transactions.clone())
            .unwrap_or_default())
    }

    fn delete_transaction(&self, owner: &UserId, id: Uuid) -> Result<bool> {
        Ok(self
            .write()?
            .get_mut(owner)
            .map_or(false, |records| records.remove_transaction(id)))
    }

    fn replace_goals(&self, owner: &UserId, goals: Vec<CategoryBudgetGoal>) -> Result<()> {
        self.write()?.entry(owner.clone()).or_default().goals = goals;
        Ok(())
    }

    fn goals(&self, owner: &UserId) -> Result<Vec<CategoryBudgetGoal>> {
        Ok(self
            .read()?
            .get(owner)
            .map(|records| records.goals.clone())
            .unwrap_or_default())
    }

    fn insert_debt(&self, debt: Debt) -> Result<()> {
        let mut users = self.write()?;
        users.entry(debt.owner().clone()).or_default().debts.push(debt);
        Ok(())
    }

    fn debts(&self, owner: &UserId) -> Result<Vec<Debt>> {
        Ok(self
            .read()?
            .get(owner)
            .map(|records| records.debts.clone())
            .unwrap_or_default())
    }

    fn delete_debt(&self, owner: &UserId, id: Uuid) -> Result<bool> {
        Ok(self
            .write()?
            .get_mut(owner)
            .map_or(false, |records| records.remove_debt(id)))
    }

    fn insert_reminder(&self, reminder: Reminder) -> Result<()> {
        let mut users = self.write()?;
        users
            .entry(reminder.owner().clone())
            .or_default()
            .reminders
            .push(reminder);
        Ok(())
    }

    fn reminders(&self, owner: &UserId) -> Result<Vec<Reminder>> {
        Ok(self
            .read()?
            .get(owner)
            .map(|records| records.reminders.clone())
            .unwrap_or_default())
    }

    fn delete_reminder(&self, owner: &UserId, id: Uuid) -> Result<bool> {
        Ok(self
            .write()?
            .get_mut(owner)
            .map_or(false, |records| records.remove_reminder(id)))
    }
}
