//! Sign-up, login and logout endpoints

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
    routing::post,
};
use axum_extra::{TypedHeader, headers};
use serde_json::json;

use report_desk::{LoginRequest, SignUpRequest};

use crate::error::{ErrorResponse, IntoResponseError};
use crate::session::session_id_from_cookies;
use crate::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/sign-up", post(sign_up))
        .route("/login", post(login))
        .route("/logout", post(logout))
}

async fn sign_up(
    State(state): State<AppState>,
    payload: Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let request = payload.into_response_error()?;
    let grant = state.identity.sign_up(request).await.into_response_error()?;
    Ok((grant.headers, Json(grant.user)))
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let request = payload.into_response_error()?;
    let grant = state.identity.login(request).await.into_response_error()?;
    Ok((grant.headers, Json(grant.user)))
}

/// Always answers with an expiring cookie, whether or not a session was present
async fn logout(
    State(state): State<AppState>,
    cookies: Option<TypedHeader<headers::Cookie>>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let headers = state
        .identity
        .logout(session_id_from_cookies(&cookies))
        .await
        .into_response_error()?;
    Ok((headers, Json(json!({ "success": true }))))
}
