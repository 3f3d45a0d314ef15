use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Identifiable, Owned, UserId};

/// A dated note to self, such as an upcoming bill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub owner: UserId,
    pub title: String,
    #[serde(default)]
    pub note: String,
    pub date: DateTime<Utc>,
}

impl Reminder {
    pub fn new(owner: UserId, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            title: title.into(),
            note: String::new(),
            date,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

impl Identifiable for Reminder {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Owned for Reminder {
    fn owner(&self) -> &UserId {
        &self.owner
    }
}
