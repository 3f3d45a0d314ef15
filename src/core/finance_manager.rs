use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::{Config, ConfigManager};
use crate::core::services::{
    CategoryService, GoalService, ServiceError, ServiceResult, SummaryService,
    TransactionService,
};
use crate::core::utils::MAX_AMOUNT;
use crate::domain::{
    Category, CategoryBudgetGoal, CategoryShare, Debt, DerivedSummary, FilteredTransactions,
    RawTransaction, Reminder, SummaryPolicy, Transaction, UserId,
};
use crate::errors::ValidationError;
use crate::storage::{JsonStore, RecordStore};

/// Facade that pairs a record store with the aggregation services.
///
/// Every call takes an already-authenticated [`UserId`]; session handling
/// happens before the manager is reached. Nothing is cached between calls.
pub struct FinanceManager {
    store: Box<dyn RecordStore>,
    policy: SummaryPolicy,
}

impl FinanceManager {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self {
            store,
            policy: SummaryPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: SummaryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Opens a JSON-backed manager using the stored configuration.
    pub fn open(configs: &ConfigManager) -> ServiceResult<Self> {
        let config: Config = configs.load()?;
        let store = JsonStore::new(Some(config.records_dir(configs.base_dir())))?;
        tracing::info!(root = %store.root().display(), "opened json record store");
        Ok(Self::new(Box::new(store)).with_policy(config.summary_policy()))
    }

    pub fn store(&self) -> &dyn RecordStore {
        self.store.as_ref()
    }

    pub fn policy(&self) -> &SummaryPolicy {
        &self.policy
    }

    pub fn add_transaction(
        &self,
        user: &UserId,
        raw: RawTransaction,
    ) -> ServiceResult<Transaction> {
        let transaction = TransactionService::normalize_now(user, raw).map_err(|err| {
            tracing::warn!(user = %user, error = %err, "rejected transaction");
            err
        })?;
        self.store.insert_transaction(transaction.clone())?;
        tracing::info!(user = %user, id = %transaction.id, "transaction added");
        Ok(transaction)
    }

    pub fn transactions(&self, user: &UserId) -> ServiceResult<Vec<Transaction>> {
        Ok(self.store.transactions(user)?)
    }

    /// Filters the ledger by category and title search, with totals over the matches.
    pub fn filter_transactions(
        &self,
        user: &UserId,
        category: Option<Category>,
        query: &str,
    ) -> ServiceResult<FilteredTransactions> {
        let ledger = self.store.transactions(user)?;
        let transactions = TransactionService::filter(&ledger, category, query);
        let summary = SummaryService::compute_summary(&transactions);
        tracing::debug!(
            user = %user,
            matched = transactions.len(),
            total = ledger.len(),
            "filtered transactions"
        );
        Ok(FilteredTransactions {
            transactions,
            summary,
        })
    }

    pub fn delete_transaction(&self, user: &UserId, id: Uuid) -> ServiceResult<()> {
        if self.store.delete_transaction(user, id)? {
            tracing::info!(user = %user, %id, "transaction deleted");
            Ok(())
        } else {
            Err(ServiceError::Invalid("Transaction not found".into()))
        }
    }

    /// Upserts goals per category and returns the stored list.
    pub fn set_goals(
        &self,
        user: &UserId,
        goals: Vec<CategoryBudgetGoal>,
    ) -> ServiceResult<Vec<CategoryBudgetGoal>> {
        let updates = goals
            .into_iter()
            .map(|goal| CategoryBudgetGoal {
                owner: user.clone(),
                ..goal
            })
            .collect();
        let existing = self.store.goals(user)?;
        let merged = GoalService::set_goals(&existing, updates).map_err(|err| {
            tracing::warn!(user = %user, error = %err, "rejected goals");
            err
        })?;
        self.store.replace_goals(user, merged.clone())?;
        tracing::info!(user = %user, goals = merged.len(), "goals updated");
        Ok(merged)
    }

    pub fn goals(&self, user: &UserId) -> ServiceResult<Vec<CategoryBudgetGoal>> {
        Ok(self.store.goals(user)?)
    }

    pub fn add_debt(&self, user: &UserId, name: &str, amount: f64) -> ServiceResult<Debt> {
        let name = name.trim();
        let rejection = if name.is_empty() {
            Some(ValidationError::new("name", "must not be empty"))
        } else if !amount.is_finite() {
            Some(ValidationError::new("amount", "must be a finite number"))
        } else if amount < 0.0 {
            Some(ValidationError::new("amount", "must not be negative"))
        } else if amount > MAX_AMOUNT {
            Some(ValidationError::new("amount", "exceeds the maximum amount"))
        } else {
            None
        };
        if let Some(err) = rejection {
            tracing::warn!(user = %user, error = %err, "rejected debt");
            return Err(err.into());
        }

        let debt = Debt::new(user.clone(), name, amount);
        self.store.insert_debt(debt.clone())?;
        tracing::info!(user = %user, id = %debt.id, "debt added");
        Ok(debt)
    }

    pub fn debts(&self, user: &UserId) -> ServiceResult<Vec<Debt>> {
        Ok(self.store.debts(user)?)
    }

    pub fn delete_debt(&self, user: &UserId, id: Uuid) -> ServiceResult<()> {
        if self.store.delete_debt(user, id)? {
            tracing::info!(user = %user, %id, "debt deleted");
            Ok(())
        } else {
            Err(ServiceError::Invalid("Debt not found".into()))
        }
    }

    pub fn add_reminder(
        &self,
        user: &UserId,
        title: &str,
        note: &str,
        date: DateTime<Utc>,
    ) -> ServiceResult<Reminder> {
        let title = title.trim();
        if title.is_empty() {
            let err = ValidationError::new("title", "must not be empty");
            tracing::warn!(user = %user, error = %err, "rejected reminder");
            return Err(err.into());
        }
        let reminder = Reminder::new(user.clone(), title, date).with_note(note.trim());
        self.store.insert_reminder(reminder.clone())?;
        tracing::info!(user = %user, id = %reminder.id, "reminder added");
        Ok(reminder)
    }

    /// The user's reminders, soonest first.
    pub fn reminders(&self, user: &UserId) -> ServiceResult<Vec<Reminder>> {
        let mut reminders = self.store.reminders(user)?;
        reminders.sort_by_key(|reminder| reminder.date);
        Ok(reminders)
    }

    pub fn delete_reminder(&self, user: &UserId, id: Uuid) -> ServiceResult<()> {
        if self.store.delete_reminder(user, id)? {
            tracing::info!(user = %user, %id, "reminder deleted");
            Ok(())
        } else {
            Err(ServiceError::Invalid("Reminder not found".into()))
        }
    }

    /// Fetches a fresh snapshot of the user's records and composes the summary.
    pub fn summary(&self, user: &UserId) -> ServiceResult<DerivedSummary> {
        let transactions = self.store.transactions(user)?;
        let goals = self.store.goals(user)?;
        let debts = self.store.debts(user)?;
        Ok(SummaryService::compose_summary_with(
            &transactions,
            &goals,
            &debts,
            &self.policy,
        ))
    }

    pub fn expense_breakdown(&self, user: &UserId) -> ServiceResult<Vec<CategoryShare>> {
        let transactions = self.store.transactions(user)?;
        Ok(CategoryService::expense_breakdown(&transactions))
    }
}
