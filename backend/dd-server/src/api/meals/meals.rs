//! Meal REST API handlers
//!
//! Every handler resolves the session first and reports through
//! [`Session::respond`] so a newly issued cookie survives error responses.

use crate::{
    ApiError, ApiResult, AppState, MealDto, MealListResponse, MealResponse, MealService, MetricsResponse,
    Session,
};

use dd_core::{Identity, RequestValidator};

use std::panic::Location;

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Response,
};
use error_location::ErrorLocation;
use serde_json::Value;
use uuid::Uuid;

type JsonBody = Result<Json<Value>, JsonRejection>;
type IdPath = Result<Path<String>, PathRejection>;

/// Length of the hyphenated 8-4-4-4-12 form, the only one accepted
const HYPHENATED_UUID_LEN: usize = 36;

// =============================================================================
// Handlers
// =============================================================================

/// GET /meals
pub async fn list_meals(State(state): State<AppState>, session: Session) -> Response {
    let result = list(&state, &session.identity).await;
    session.respond(result)
}

/// GET /meals/{id}
///
/// Responds `{}` when the meal is missing or owned by someone else
pub async fn get_meal(
    State(state): State<AppState>,
    session: Session,
    id: IdPath,
) -> Response {
    let result = get(&state, &session.identity, id).await;
    session.respond(result)
}

/// POST /meals
pub async fn create_meal(
    State(state): State<AppState>,
    session: Session,
    body: JsonBody,
) -> Response {
    let result = create(&state, &session.identity, body).await;
    session.respond(result)
}

/// PUT /meals/{id}
pub async fn update_meal(
    State(state): State<AppState>,
    session: Session,
    id: IdPath,
    body: JsonBody,
) -> Response {
    let result = update(&state, &session.identity, id, body).await;
    session.respond(result)
}

/// DELETE /meals/{id}
pub async fn delete_meal(
    State(state): State<AppState>,
    session: Session,
    id: IdPath,
) -> Response {
    let result = delete(&state, &session.identity, id).await;
    session.respond(result)
}

/// GET /meals/metrics
pub async fn meal_metrics(State(state): State<AppState>, session: Session) -> Response {
    let result = metrics(&state, &session.identity).await;
    session.respond(result)
}

// =============================================================================
// Operations
// =============================================================================

async fn list(state: &AppState, identity: &Identity) -> ApiResult<Json<MealListResponse>> {
    let meals = MealService::new(state.pool.clone()).list(identity).await?;

    Ok(Json(MealListResponse {
        meals: meals.into_iter().map(MealDto::from).collect(),
    }))
}

async fn get(state: &AppState, identity: &Identity, id: IdPath) -> ApiResult<Json<MealResponse>> {
    let meal_id = parse_meal_id(id)?;
    let meal = MealService::new(state.pool.clone())
        .get(identity, meal_id)
        .await?;

    Ok(Json(MealResponse {
        meal: meal.map(MealDto::from),
    }))
}

async fn create(state: &AppState, identity: &Identity, body: JsonBody) -> ApiResult<StatusCode> {
    let Json(body) = body?;
    let fields = RequestValidator::validate_meal(&body)?;

    MealService::new(state.pool.clone())
        .create(identity, fields)
        .await?;

    Ok(StatusCode::CREATED)
}

async fn update(
    state: &AppState,
    identity: &Identity,
    id: IdPath,
    body: JsonBody,
) -> ApiResult<StatusCode> {
    let meal_id = parse_meal_id(id)?;
    let Json(body) = body?;
    let fields = RequestValidator::validate_meal(&body)?;

    MealService::new(state.pool.clone())
        .update(identity, meal_id, fields)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn delete(state: &AppState, identity: &Identity, id: IdPath) -> ApiResult<StatusCode> {
    let meal_id = parse_meal_id(id)?;

    MealService::new(state.pool.clone())
        .delete(identity, meal_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

async fn metrics(state: &AppState, identity: &Identity) -> ApiResult<Json<MetricsResponse>> {
    let metrics = MealService::new(state.pool.clone())
        .metrics(identity, state.streak_order)
        .await?;

    Ok(Json(metrics.into()))
}

/// Accepts only the hyphenated UUID form; simple, braced and URN forms are rejected
fn parse_meal_id(id: IdPath) -> ApiResult<Uuid> {
    let Path(id) = id?;
    let meal_id = Uuid::try_parse(&id)?;

    if id.len() != HYPHENATED_UUID_LEN {
        return Err(ApiError::Validation {
            message: format!("Invalid UUID format: {}", id),
            field: Some("id".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(meal_id)
}
