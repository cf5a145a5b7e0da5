use dd_core::Meal;

use serde::Serialize;

/// Meal DTO, field names follow the storage columns
#[derive(Debug, Serialize)]
pub struct MealDto {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub is_on_diet: bool,
    /// Epoch milliseconds
    pub date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Meal> for MealDto {
    fn from(m: Meal) -> Self {
        Self {
            id: m.id.to_string(),
            user_id: m.owner_id.to_string(),
            date: m.occurred_at_millis(),
            name: m.name,
            description: m.description,
            is_on_diet: m.is_on_diet,
            created_at: m.created_at.timestamp(),
            updated_at: m.updated_at.timestamp(),
        }
    }
}
