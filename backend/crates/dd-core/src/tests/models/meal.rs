use crate::{Meal, MealFields};

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

fn fields(name: &str, is_on_diet: bool, millis: i64) -> MealFields {
    MealFields {
        name: name.to_string(),
        description: "desc".to_string(),
        is_on_diet,
        occurred_at: DateTime::from_timestamp_millis(millis).unwrap(),
    }
}

#[test]
fn test_meal_new() {
    let owner_id = Uuid::new_v4();
    let meal = Meal::new(owner_id, fields("Breakfast", true, 1_710_000_000_123));

    assert_eq!(meal.owner_id, owner_id);
    assert_eq!(meal.name, "Breakfast");
    assert!(meal.is_on_diet);
    assert_eq!(meal.occurred_at_millis(), 1_710_000_000_123);
    assert_eq!(meal.created_at, meal.updated_at);
}

#[test]
fn test_meal_apply_replaces_fields_and_keeps_ownership() {
    let owner_id = Uuid::new_v4();
    let mut meal = Meal::new(owner_id, fields("Breakfast", true, 0));
    let id = meal.id;
    meal.updated_at = Utc::now() - Duration::hours(1);
    let before = meal.updated_at;

    meal.apply(fields("Pizza", false, 86_400_000));

    assert_eq!(meal.id, id);
    assert_eq!(meal.owner_id, owner_id);
    assert_eq!(meal.name, "Pizza");
    assert!(!meal.is_on_diet);
    assert_eq!(meal.occurred_at_millis(), 86_400_000);
    assert!(meal.updated_at > before);
}
