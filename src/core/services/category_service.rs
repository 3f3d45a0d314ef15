use std::cmp::Ordering;

use crate::core::utils::bounded_amount;
use crate::domain::summary::{CategoryShare, CategorySpend};
use crate::domain::transaction::Transaction;

/// Buckets ledger amounts by category.
pub struct CategoryService;

impl CategoryService {
    /// Signed sum of amounts per category. Only categories that appear in
    /// `transactions` get an entry.
    pub fn compute_category_spend(transactions: &[Transaction]) -> CategorySpend {
        let spend: CategorySpend = transactions
            .iter()
            .map(|txn| (txn.category, bounded_amount(txn.amount)))
            .collect();
        tracing::debug!(categories = spend.len(), "computed category spend");
        spend
    }

    /// Expense-only breakdown for the "spending by category" chart, largest first.
    pub fn expense_breakdown(transactions: &[Transaction]) -> Vec<CategoryShare> {
        let expenses: CategorySpend = transactions
            .iter()
            .filter_map(|txn| {
                let amount = bounded_amount(txn.amount);
                (amount < 0.0).then(|| (txn.category, -amount))
            })
            .collect();
        let total: f64 = expenses.iter().map(|(_, amount)| amount).sum();

        let mut shares: Vec<CategoryShare> = expenses
            .iter()
            .map(|(category, amount)| CategoryShare {
                category: *category,
                amount: *amount,
                share_percent: if total > 0.0 {
                    amount / total * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        // Stable sort keeps enum order among equal amounts.
        shares.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(Ordering::Equal));
        shares
    }
}
