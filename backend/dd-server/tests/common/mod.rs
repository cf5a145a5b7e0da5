#![allow(dead_code)]

//! Test infrastructure for dd-server API tests

use dd_config::SessionConfig;
use dd_core::StreakOrder;
use dd_db::ConnectionManager;
use dd_server::{AppState, build_router};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header::COOKIE, header::SET_COOKIE},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Create AppState backed by a fresh in-memory database
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_order(StreakOrder::Chronological).await
}

pub async fn create_test_app_state_with_order(streak_order: StreakOrder) -> AppState {
    let pool = ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState {
        pool,
        session: SessionConfig::default(),
        streak_order,
        request_timeout: Duration::from_secs(30),
    }
}

/// Send one request through a freshly built router
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    session: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = session {
        builder = builder.header(COOKIE, format!("sessionId={}", token));
    }

    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    build_router(state.clone())
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap()
}

/// Session token carried by the response's Set-Cookie header, if any
pub fn issued_token(response: &Response<Body>) -> Option<String> {
    let cookie = response.headers().get(SET_COOKIE)?.to_str().ok()?;
    let (pair, _attributes) = cookie.split_once(';')?;
    let (_name, value) = pair.split_once('=')?;
    Some(value.to_string())
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

/// Obtain a fresh anonymous session by hitting any session-scoped route
pub async fn new_session(state: &AppState) -> String {
    let response = send(state, "GET", "/meals", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    issued_token(&response).expect("session cookie should be issued")
}

pub fn meal_body(name: &str, is_on_diet: bool, date: &str) -> Value {
    json!({
        "name": name,
        "description": format!("{} description", name),
        "isOnDiet": is_on_diet,
        "date": date,
    })
}

/// Create a meal and return its id as reported by the list endpoint
pub async fn create_meal(state: &AppState, token: &str, body: Value) -> String {
    let name = body["name"].as_str().unwrap().to_string();
    let response = send(state, "POST", "/meals", Some(token), Some(body)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let list = body_json(send(state, "GET", "/meals", Some(token), None).await).await;
    list["meals"]
        .as_array()
        .unwrap()
        .iter()
        .find(|meal| meal["name"] == name.as_str())
        .map(|meal| meal["id"].as_str().unwrap().to_string())
        .expect("created meal should be listed")
}

pub async fn count_rows(state: &AppState, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&state.pool)
        .await
        .expect("Failed to count rows")
}
