pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::meal::Meal;
pub use models::meal_fields::MealFields;
pub use models::meal_metrics::{MealMetrics, best_on_diet_sequence};
pub use models::streak_order::StreakOrder;
pub use validation::request_validator::RequestValidator;
pub use validation::registration::Registration;

#[cfg(test)]
mod tests;
