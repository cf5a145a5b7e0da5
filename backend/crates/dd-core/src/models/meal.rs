use crate::MealFields;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub id: Uuid,
    pub owner_id: Uuid,

    pub name: String,
    pub description: String,
    pub is_on_diet: bool,

    /// When the meal happened, as reported by the client (millisecond precision)
    pub occurred_at: DateTime<Utc>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Meal {
    pub fn new(owner_id: Uuid, fields: MealFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: fields.name,
            description: fields.description,
            is_on_diet: fields.is_on_diet,
            occurred_at: fields.occurred_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full replace of the editable fields; identity and ownership never change
    pub fn apply(&mut self, fields: MealFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.is_on_diet = fields.is_on_diet;
        self.occurred_at = fields.occurred_at;
        self.updated_at = Utc::now();
    }

    /// Storage encoding of `occurred_at`
    pub fn occurred_at_millis(&self) -> i64 {
        self.occurred_at.timestamp_millis()
    }
}
