use crate::{AppState, Session, read_session_token, session_cookie};

use dd_config::SessionConfig;
use dd_core::{Identity, StreakOrder};
use dd_db::{ConnectionManager, IdentityRepository};

use std::time::Duration;

use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{HeaderMap, HeaderValue, Request, StatusCode, header::COOKIE, header::SET_COOKIE},
};
use googletest::assert_that;
use googletest::prelude::{eq, none, some};

async fn create_test_state() -> AppState {
    let pool = ConnectionManager::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState {
        pool,
        session: SessionConfig::default(),
        streak_order: StreakOrder::Chronological,
        request_timeout: Duration::from_secs(30),
    }
}

fn cookie_headers(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static(value));
    headers
}

#[test]
fn test_read_session_token_finds_named_cookie() {
    let headers = cookie_headers("theme=dark; sessionId=abc-123; lang=en");

    assert_that!(read_session_token(&headers, "sessionId"), some(eq("abc-123")));
}

#[test]
fn test_read_session_token_ignores_empty_value() {
    let headers = cookie_headers("sessionId=");

    assert_that!(read_session_token(&headers, "sessionId"), none());
}

#[test]
fn test_read_session_token_requires_exact_name() {
    let headers = cookie_headers("sessionIdOld=abc; xsessionId=def");

    assert_that!(read_session_token(&headers, "sessionId"), none());
}

#[test]
fn test_read_session_token_without_cookie_header() {
    assert_that!(read_session_token(&HeaderMap::new(), "sessionId"), none());
}

#[test]
fn test_session_cookie_attributes() {
    let cookie = session_cookie(&SessionConfig::default(), "abc").unwrap();
    let cookie = cookie.to_str().unwrap();

    assert!(cookie.starts_with("sessionId=abc;"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=604800"));
    assert!(!cookie.contains("Secure"));
}

#[test]
fn test_session_cookie_secure_when_configured() {
    let config = SessionConfig {
        secure: true,
        ..SessionConfig::default()
    };
    let cookie = session_cookie(&config, "abc").unwrap();

    assert!(cookie.to_str().unwrap().ends_with("; Secure"));
}

#[tokio::test]
async fn test_extractor_without_cookie_issues_identity() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let session = Session::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(session.is_new());
    assert_eq!(session.identity.name, "Anonymous");

    let repo = IdentityRepository::new(state.pool.clone());
    let stored = repo
        .find_by_session_token(&session.identity.session_token)
        .await
        .unwrap();
    assert_that!(stored.map(|i| i.id), some(eq(session.identity.id)));
}

#[tokio::test]
async fn test_extractor_with_known_token_resolves_identity() {
    let state = create_test_state().await;
    let identity = Identity::new("Ada".into(), "ada@example.com".into());
    IdentityRepository::new(state.pool.clone())
        .create(&identity)
        .await
        .unwrap();

    let request = Request::builder()
        .header(COOKIE, format!("sessionId={}", identity.session_token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let session = Session::from_request_parts(&mut parts, &state)
        .await
        .unwrap();

    assert!(!session.is_new());
    assert_eq!(session.identity.id, identity.id);
}

#[tokio::test]
async fn test_extractor_with_unknown_token_is_unauthorized() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header(COOKIE, "sessionId=not-a-real-token")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = Session::from_request_parts(&mut parts, &state).await;

    let error = result.unwrap_err();
    assert_eq!(error.status(), StatusCode::UNAUTHORIZED);

    let count = IdentityRepository::new(state.pool.clone())
        .count()
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_respond_attaches_cookie_to_error_response() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let session = Session::from_request_parts(&mut parts, &state)
        .await
        .unwrap();
    let token = session.identity.session_token.clone();

    let response = session.respond::<StatusCode>(Err(crate::ApiError::not_found("missing")));

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with(&format!("sessionId={};", token)));
}
