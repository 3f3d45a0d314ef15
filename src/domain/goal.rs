use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::common::{Amounted, Owned, UserId};

/// A user-declared spending ceiling for one category.
///
/// At most one goal exists per (owner, category); see
/// [`GoalService::set_goals`](crate::core::services::GoalService::set_goals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudgetGoal {
    pub owner: UserId,
    pub category: Category,
    pub goal: f64,
}

impl CategoryBudgetGoal {
    pub fn new(owner: UserId, category: Category, goal: f64) -> Self {
        Self {
            owner,
            category,
            goal,
        }
    }
}

impl Owned for CategoryBudgetGoal {
    fn owner(&self) -> &UserId {
        &self.owner
    }
}

impl Amounted for CategoryBudgetGoal {
    fn amount(&self) -> f64 {
        self.goal
    }
}
