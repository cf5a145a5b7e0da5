//! Identity REST API handlers

use crate::{ApiResult, AppState, Session, UserDto, UserResponse, session_cookie};

use dd_core::{Identity, RequestValidator};
use dd_db::IdentityRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use serde_json::Value;

/// POST /users
///
/// Register a named identity and hand its session token back as a cookie.
/// Any session cookie already on the request is ignored.
pub async fn register_user(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(body) = body?;
    let registration = RequestValidator::validate_registration(&body)?;

    let identity = Identity::new(registration.name, registration.email);
    let cookie = session_cookie(&state.session, &identity.session_token)?;

    IdentityRepository::new(state.pool.clone())
        .create(&identity)
        .await?;

    log::info!("Registered identity {}", identity.id);

    Ok((
        StatusCode::CREATED,
        [(SET_COOKIE, cookie)],
        Json(UserResponse {
            user: identity.into(),
        }),
    )
        .into_response())
}

/// GET /users/me
pub async fn current_user(session: Session) -> Response {
    let user = UserDto::from(session.identity.clone());
    session.respond(Ok(Json(UserResponse { user })))
}
