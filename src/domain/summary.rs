//! Output contracts of the aggregation engine. None of these are persisted;
//! they are recomputed from the current inputs on every call.

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::transaction::Transaction;

/// Percentage of the declared budget at which health turns to
/// [`BudgetHealth::Caution`].
pub const DEFAULT_CAUTION_PERCENT: f64 = 70.0;

/// Income/expense totals over a whole ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub net: f64,
    pub transaction_count: usize,
}

/// A filtered slice of the ledger with totals over just that slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilteredTransactions {
    pub transactions: Vec<Transaction>,
    pub summary: TransactionSummary,
}

/// Signed spend per category. Categories without transactions are absent and
/// read as zero through [`CategorySpend::get`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySpend(BTreeMap<Category, f64>);

impl CategorySpend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the running total for `category`, creating the entry
    /// if needed.
    pub fn record(&mut self, category: Category, amount: f64) {
        *self.0.entry(category).or_insert(0.0) += amount;
    }

    pub fn get(&self, category: Category) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Category, f64> {
        self.0.iter()
    }
}

impl FromIterator<(Category, f64)> for CategorySpend {
    fn from_iter<I: IntoIterator<Item = (Category, f64)>>(iter: I) -> Self {
        let mut spend = CategorySpend::new();
        for (category, amount) in iter {
            spend.record(category, amount);
        }
        spend
    }
}

impl<'a> IntoIterator for &'a CategorySpend {
    type Item = (&'a Category, &'a f64);
    type IntoIter = btree_map::Iter<'a, Category, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Progress of one declared goal against the category's signed spend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub category: Category,
    pub goal: f64,
    pub spent: f64,
}

impl GoalProgress {
    /// Expense magnitude charged against the goal. Net income in the
    /// category counts as nothing used.
    pub fn used(&self) -> f64 {
        (-self.spent).max(0.0)
    }

    pub fn remaining(&self) -> f64 {
        self.goal - self.used()
    }

    pub fn is_over_goal(&self) -> bool {
        self.used() > self.goal
    }
}

/// Goals merged with spend, in the order the goals were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalReconciliation {
    pub entries: Vec<GoalProgress>,
    pub total_budget: f64,
}

/// One slice of the "spending by category" chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    pub amount: f64,
    pub share_percent: f64,
}

/// Coarse health of spending relative to the declared budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetHealth {
    NoBudget,
    OnTrack,
    Caution,
    OverBudget,
}

/// Tunables for composing a [`DerivedSummary`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryPolicy {
    pub caution_percent: f64,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            caution_percent: DEFAULT_CAUTION_PERCENT,
        }
    }
}

/// The complete computed view handed to dashboards and charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedSummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_budget: f64,
    /// Budget-relative: `total_budget - total_expenses`. Negative means overspend.
    pub savings: f64,
    /// Ledger-relative: `total_income - total_expenses`.
    pub net_worth: f64,
    pub category_spend: CategorySpend,
    pub goal_progress: Vec<GoalProgress>,
    pub total_debt: f64,
    pub budget_utilization: f64,
    pub income_utilization: f64,
    pub transaction_count: usize,
    pub health: BudgetHealth,
}
