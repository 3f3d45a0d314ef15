use crate::core::utils::{bounded_amount, finite_or_zero, MAX_AMOUNT};
use crate::domain::goal::CategoryBudgetGoal;
use crate::domain::summary::{CategorySpend, GoalProgress, GoalReconciliation};
use crate::errors::ValidationError;

/// Merges declared category goals with actual spend.
pub struct GoalService;

impl GoalService {
    /// One entry per goal, in the order the goals were supplied. Spend in
    /// categories without a goal is ignored.
    pub fn reconcile_goals(
        goals: &[CategoryBudgetGoal],
        spend: &CategorySpend,
    ) -> GoalReconciliation {
        let entries: Vec<GoalProgress> = goals
            .iter()
            .map(|goal| GoalProgress {
                category: goal.category,
                goal: bounded_amount(goal.goal),
                spent: finite_or_zero(spend.get(goal.category)),
            })
            .collect();
        let total_budget: f64 = entries.iter().map(|entry| entry.goal).sum();
        tracing::debug!(goals = entries.len(), total_budget, "reconciled goals");
        GoalReconciliation {
            entries,
            total_budget,
        }
    }

    /// Applies `updates` on top of `existing`, keeping at most one goal per category.
    ///
    /// A category already present is replaced where it stands; new categories
    /// are appended in the order given. Within `updates` the last goal for a
    /// category wins.
    pub fn set_goals(
        existing: &[CategoryBudgetGoal],
        updates: Vec<CategoryBudgetGoal>,
    ) -> Result<Vec<CategoryBudgetGoal>, ValidationError> {
        for update in &updates {
            Self::validate_goal(update.goal)?;
        }

        let mut merged: Vec<CategoryBudgetGoal> =
            Vec::with_capacity(existing.len() + updates.len());
        for goal in existing {
            match merged.iter_mut().find(|current| current.category == goal.category) {
                Some(current) => *current = goal.clone(),
                None => merged.push(goal.clone()),
            }
        }
        for update in updates {
            match merged.iter_mut().find(|current| current.category == update.category) {
                Some(current) => *current = update,
                None => merged.push(update),
            }
        }
        Ok(merged)
    }

    fn validate_goal(goal: f64) -> Result<(), ValidationError> {
        if !goal.is_finite() {
            return Err(ValidationError::new("goal", "must be a finite number"));
        }
        if goal < 0.0 {
            return Err(ValidationError::new("goal", "must not be negative"));
        }
        if goal > MAX_AMOUNT {
            return Err(ValidationError::new("goal", "exceeds the maximum amount"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, UserId};

    fn goal(category: Category, amount: f64) -> CategoryBudgetGoal {
        CategoryBudgetGoal::new(UserId::new("u"), category, amount)
    }

    #[test]
    fn entries_follow_goal_order() {
        let spend: CategorySpend = [(Category::Food, -1200.0), (Category::Travel, -300.0)]
            .into_iter()
            .collect();
        let result = GoalService::reconcile_goals(
            &[goal(Category::Travel, 500.0), goal(Category::Food, 1000.0)],
            &spend,
        );
        assert_eq!(result.entries[0].category, Category::Travel);
        assert_eq!(result.entries[1].category, Category::Food);
        assert_eq!(result.total_budget, 1500.0);
    }

    #[test]
    fn goal_without_spend_reads_zero() {
        let result =
            GoalService::reconcile_goals(&[goal(Category::Bills, 250.0)], &CategorySpend::new());
        assert_eq!(result.entries[0].spent, 0.0);
        assert_eq!(result.total_budget, 250.0);
    }

    #[test]
    fn spend_without_goal_is_omitted() {
        let spend: CategorySpend = [(Category::Food, -80.0), (Category::Shopping, -999.0)]
            .into_iter()
            .collect();
        let result = GoalService::reconcile_goals(&[goal(Category::Food, 100.0)], &spend);
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.total_budget, 100.0);
    }

    #[test]
    fn set_goals_replaces_in_place_and_appends_new() {
        let existing = vec![goal(Category::Food, 1000.0), goal(Category::Travel, 500.0)];
        let merged = GoalService::set_goals(
            &existing,
            vec![goal(Category::Bills, 300.0), goal(Category::Food, 800.0)],
        )
        .unwrap();
        let summary: Vec<(Category, f64)> = merged.iter().map(|g| (g.category, g.goal)).collect();
        assert_eq!(
            summary,
            vec![
                (Category::Food, 800.0),
                (Category::Travel, 500.0),
                (Category::Bills, 300.0)
            ]
        );
    }

    #[test]
    fn set_goals_last_duplicate_wins() {
        let merged = GoalService::set_goals(
            &[],
            vec![goal(Category::Food, 100.0), goal(Category::Food, 150.0)],
        )
        .unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].goal, 150.0);
    }

    #[test]
    fn set_goals_rejects_negative_goal() {
        let err = GoalService::set_goals(&[], vec![goal(Category::Food, -1.0)])
            .expect_err("negative goal must fail");
        assert_eq!(err.field, "goal");
    }

    #[test]
    fn set_goals_rejects_oversized_goal() {
        let err = GoalService::set_goals(&[], vec![goal(Category::Food, f64::MAX)])
            .expect_err("oversized goal must fail");
        assert_eq!(err.field, "goal");
    }
}
