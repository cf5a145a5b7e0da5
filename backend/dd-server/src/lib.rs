pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod services;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::session::{Session, read_session_token, session_cookie},
    meals::{
        meal_dto::MealDto,
        meal_list_response::MealListResponse,
        meal_response::MealResponse,
        meals::{create_meal, delete_meal, get_meal, list_meals, meal_metrics, update_meal},
        metrics_response::MetricsResponse,
    },
    users::{
        user_dto::UserDto,
        user_response::UserResponse,
        users::{current_user, register_user},
    },
};
pub use app_state::AppState;
pub use services::meal_service::MealService;

pub use crate::routes::build_router;
