pub mod identity;
pub mod meal;
pub mod meal_fields;
pub mod meal_metrics;
pub mod streak_order;
