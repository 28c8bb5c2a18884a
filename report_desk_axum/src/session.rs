use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
};
use axum_extra::{TypedHeader, headers};
use http::request::Parts;

use report_desk::{Caller, CoordinationError, SESSION_COOKIE_NAME};

use crate::error::ErrorResponse;
use crate::state::AppState;

/// Authenticated caller, available as an Axum extractor
///
/// Resolves the session cookie through the state's identity provider. Requests
/// without a valid session are rejected with `401 {"error": ...}`.
///
/// ```no_run
/// use report_desk_axum::AuthUser;
///
/// async fn whoami(AuthUser(caller): AuthUser) -> String {
///     format!("Hello, {}!", caller.username)
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthUser(pub Caller);

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ErrorResponse;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("Request carries no cookies");
            ErrorResponse::unauthenticated()
        })?;

        let session_id = cookies.get(SESSION_COOKIE_NAME.as_str()).ok_or_else(|| {
            tracing::debug!("No session cookie '{}'", SESSION_COOKIE_NAME.as_str());
            ErrorResponse::unauthenticated()
        })?;

        match state.identity.current_caller(session_id).await {
            Ok(caller) => Ok(AuthUser(caller)),
            Err(CoordinationError::Unauthenticated) => Err(ErrorResponse::unauthenticated()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Session id from the request cookies, if any
pub(crate) fn session_id_from_cookies(
    cookies: &Option<TypedHeader<headers::Cookie>>,
) -> Option<&str> {
    cookies
        .as_ref()
        .and_then(|TypedHeader(c)| c.get(SESSION_COOKIE_NAME.as_str()))
}
