use crate::core::services::{CategoryService, DebtService, GoalService};
use crate::core::utils::bounded_amount;
use crate::domain::debt::Debt;
use crate::domain::goal::CategoryBudgetGoal;
use crate::domain::summary::{BudgetHealth, DerivedSummary, SummaryPolicy, TransactionSummary};
use crate::domain::transaction::Transaction;

/// Ledger totals and the composed dashboard summary.
pub struct SummaryService;

impl SummaryService {
    /// Single pass over the ledger. Positive amounts are income, negative
    /// amounts count towards expenses by magnitude, zero counts towards neither.
    pub fn compute_summary(transactions: &[Transaction]) -> TransactionSummary {
        let (total_income, total_expenses) =
            transactions
                .iter()
                .fold((0.0_f64, 0.0_f64), |(income, expenses), txn| {
                    let amount = bounded_amount(txn.amount);
                    if txn.is_income() {
                        (income + amount, expenses)
                    } else {
                        (income, expenses + amount.abs())
                    }
                });
        TransactionSummary {
            total_income,
            total_expenses,
            net: total_income - total_expenses,
            transaction_count: transactions.len(),
        }
    }

    /// Composes the full summary with the default [`SummaryPolicy`].
    pub fn compose_summary(
        transactions: &[Transaction],
        goals: &[CategoryBudgetGoal],
        debts: &[Debt],
    ) -> DerivedSummary {
        Self::compose_summary_with(transactions, goals, debts, &SummaryPolicy::default())
    }

    pub fn compose_summary_with(
        transactions: &[Transaction],
        goals: &[CategoryBudgetGoal],
        debts: &[Debt],
        policy: &SummaryPolicy,
    ) -> DerivedSummary {
        let totals = Self::compute_summary(transactions);
        let category_spend = CategoryService::compute_category_spend(transactions);
        let reconciliation = GoalService::reconcile_goals(goals, &category_spend);
        let total_debt = DebtService::compute_debt_total(debts);

        let total_budget = reconciliation.total_budget;
        let savings = total_budget - totals.total_expenses;
        let budget_utilization = utilization(totals.total_expenses, total_budget);
        let income_utilization = utilization(totals.total_expenses, totals.total_income);
        let health = Self::budget_health(total_budget, savings, budget_utilization, policy);

        tracing::debug!(
            transactions = totals.transaction_count,
            goals = reconciliation.entries.len(),
            debts = debts.len(),
            ?health,
            "composed summary"
        );

        DerivedSummary {
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            total_budget,
            savings,
            net_worth: totals.total_income - totals.total_expenses,
            category_spend,
            goal_progress: reconciliation.entries,
            total_debt,
            budget_utilization,
            income_utilization,
            transaction_count: totals.transaction_count,
            health,
        }
    }

    /// Classifies spending against the declared budget.
    pub fn budget_health(
        total_budget: f64,
        savings: f64,
        budget_utilization: f64,
        policy: &SummaryPolicy,
    ) -> BudgetHealth {
        if total_budget <= 0.0 {
            BudgetHealth::NoBudget
        } else if savings < 0.0 {
            BudgetHealth::OverBudget
        } else if budget_utilization >= policy.caution_percent {
            BudgetHealth::Caution
        } else {
            BudgetHealth::OnTrack
        }
    }
}

/// `part / whole` as a percentage capped at 100; zero when `whole` is not positive.
fn utilization(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole * 100.0).min(100.0)
    } else {
        0.0
    }
}
