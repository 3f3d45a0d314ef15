use crate::core::utils::bounded_amount;
use crate::domain::common::Amounted;
use crate::domain::debt::Debt;

pub struct DebtService;

impl DebtService {
    /// Sum of outstanding debt. Negative amounts are summed as given; the
    /// write path is responsible for rejecting them.
    pub fn compute_debt_total(debts: &[Debt]) -> f64 {
        let total: f64 = debts.iter().map(|debt| bounded_amount(debt.amount())).sum();
        tracing::debug!(debts = debts.len(), total, "computed debt total");
        total
    }
}
