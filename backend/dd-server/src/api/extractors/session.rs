//! Session Resolver
//!
//! Maps the session cookie on an inbound request to its [`Identity`]. A
//! request without a token gets a freshly persisted anonymous identity,
//! and the cookie carrying its token is attached to whatever response the
//! handler produces, error responses included.

use crate::{ApiError, ApiResult, AppState};

use dd_config::SessionConfig;
use dd_core::Identity;
use dd_db::IdentityRepository;

use std::future::Future;
use std::panic::Location;

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap, HeaderValue,
        header::{COOKIE, SET_COOKIE},
        request::Parts,
    },
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;

/// Identity resolved for the current request
#[derive(Debug)]
pub struct Session {
    pub identity: Identity,
    /// `Set-Cookie` value, present only when the identity was issued by this request
    issued_cookie: Option<HeaderValue>,
}

impl Session {
    /// True when this request created the identity
    pub fn is_new(&self) -> bool {
        self.issued_cookie.is_some()
    }

    /// Render the handler result, attaching the session cookie if one was issued
    pub fn respond<T: IntoResponse>(self, result: ApiResult<T>) -> Response {
        let mut response = result.into_response();
        if let Some(cookie) = self.issued_cookie {
            response.headers_mut().append(SET_COOKIE, cookie);
        }
        response
    }
}

impl FromRequestParts<AppState> for Session {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let repo = IdentityRepository::new(state.pool.clone());

            if let Some(token) = read_session_token(&parts.headers, &state.session.cookie_name) {
                return match repo.find_by_session_token(token).await? {
                    Some(identity) => {
                        log::debug!("Resolved session for identity {}", identity.id);
                        Ok(Session {
                            identity,
                            issued_cookie: None,
                        })
                    }
                    None => {
                        log::warn!("Rejected request with unknown session token");
                        Err(ApiError::Unauthorized {
                            message: "Invalid session".to_string(),
                            location: ErrorLocation::from(Location::caller()),
                        })
                    }
                };
            }

            let identity = Identity::anonymous();
            let cookie = session_cookie(&state.session, &identity.session_token)?;
            repo.create(&identity).await?;

            log::debug!("Issued new session for identity {}", identity.id);

            Ok(Session {
                identity,
                issued_cookie: Some(cookie),
            })
        }
    }
}

/// Value of the named cookie, ignoring empty values
pub fn read_session_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}

/// Build the `Set-Cookie` header carrying a session token
#[track_caller]
pub fn session_cookie(config: &SessionConfig, token: &str) -> ApiResult<HeaderValue> {
    let mut cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        config.cookie_name,
        token,
        config.max_age_secs()
    );
    if config.secure {
        cookie.push_str("; Secure");
    }

    HeaderValue::from_str(&cookie)
        .map_err(|e| ApiError::internal(format!("Invalid session cookie: {}", e)))
}
