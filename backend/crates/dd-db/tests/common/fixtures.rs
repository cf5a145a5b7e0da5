use dd_core::{Meal, MealFields};

use chrono::DateTime;
use uuid::Uuid;

/// Meal fields at a fixed epoch-millisecond instant
pub fn meal_fields(name: &str, is_on_diet: bool, occurred_at_millis: i64) -> MealFields {
    MealFields {
        name: name.to_string(),
        description: format!("{} description", name),
        is_on_diet,
        occurred_at: DateTime::from_timestamp_millis(occurred_at_millis)
            .expect("valid test timestamp"),
    }
}

/// Creates a test Meal with sensible defaults
pub fn create_test_meal(owner_id: Uuid, is_on_diet: bool, occurred_at_millis: i64) -> Meal {
    Meal::new(owner_id, meal_fields("Test Meal", is_on_diet, occurred_at_millis))
}
