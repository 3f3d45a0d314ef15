use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Amounted, Identifiable, Owned, UserId};

/// An outstanding liability. Debts are summed on their own and never netted
/// against income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub owner: UserId,
    pub name: String,
    pub amount: f64,
}

impl Debt {
    pub fn new(owner: UserId, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            name: name.into(),
            amount,
        }
    }
}

impl Identifiable for Debt {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Debt {
    fn owner(&self) -> &UserId {
        &self.owner
    }
}

impl Amounted for Debt {
    fn amount(&self) -> f64 {
        self.amount
    }
}
