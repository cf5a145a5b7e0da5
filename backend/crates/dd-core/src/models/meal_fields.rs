use chrono::{DateTime, Utc};

/// Validated, client-editable part of a meal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealFields {
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    pub occurred_at: DateTime<Utc>,
}
