use crate::{
    AppState, create_meal, current_user, delete_meal, get_meal, health, list_meals, meal_metrics,
    register_user, update_meal,
};

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        // Meals (scoped to the session identity)
        .route("/meals", get(list_meals).post(create_meal))
        .route("/meals/metrics", get(meal_metrics))
        .route(
            "/meals/{id}",
            get(get_meal).put(update_meal).delete(delete_meal),
        )
        // Identities
        .route("/users", post(register_user))
        .route("/users/me", get(current_user))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
