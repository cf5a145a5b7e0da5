use crate::ApiError;

use dd_core::{CoreError, RequestValidator};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_not_found_returns_404_with_flat_body() {
    let error = ApiError::not_found("This meal does not exists");
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "This meal does not exists");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "isOnDiet is required".into(),
        field: Some("isOnDiet".into()),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "isOnDiet");
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let error = ApiError::Unauthorized {
        message: "Invalid session".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_db_error_hides_details() {
    let db_error: dd_db::DbError = sqlx::Error::PoolTimedOut.into();
    let error: ApiError = db_error.into();
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["message"], "Database operation failed");
}

#[test]
fn test_db_error_converts_to_internal() {
    let db_error: dd_db::DbError = sqlx::Error::RowNotFound.into();
    let error: ApiError = db_error.into();

    assert!(matches!(error, ApiError::Internal { .. }));
}

#[test]
fn test_uuid_error_converts_to_validation() {
    let uuid_error = uuid::Uuid::parse_str("not-a-uuid").unwrap_err();
    let error: ApiError = uuid_error.into();

    match error {
        ApiError::Validation { field, message, .. } => {
            assert_eq!(field.as_deref(), Some("id"));
            assert!(message.contains("Invalid UUID"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_core_validation_error_keeps_field() {
    let core_error =
        RequestValidator::validate_meal(&serde_json::json!({ "name": "Lunch" })).unwrap_err();
    assert!(matches!(core_error, CoreError::Validation { .. }));

    let error: ApiError = core_error.into();

    match error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("description")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

