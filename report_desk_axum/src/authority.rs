//! Endpoints reserved for admins of an authority
//!
//! The authority is always the caller's own. The `{authority}` segment of the
//! legacy paths is accepted for compatibility and otherwise ignored.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::get,
};
use serde_json::{Value, json};

use report_desk::{Authority, Report, UpdateReportRequest};

use crate::error::{ErrorResponse, IntoResponseError};
use crate::session::AuthUser;
use crate::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/authority", get(get_authority))
        .route("/authority/reports", get(list_authority_reports))
        .route(
            "/authority/reports/{report_id}",
            get(get_report).put(update_report).delete(delete_report),
        )
        .route(
            "/authority/{authority}/reports/{report_id}",
            get(get_report_legacy)
                .put(update_report_legacy)
                .delete(delete_report_legacy),
        )
}

async fn get_authority(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Authority>, ErrorResponse> {
    state
        .reports
        .get_own_authority(&caller)
        .await
        .map(Json)
        .into_response_error()
}

async fn list_authority_reports(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<Report>>, ErrorResponse> {
    state
        .reports
        .list_authority_reports(&caller)
        .await
        .map(Json)
        .into_response_error()
}

async fn get_report(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(report_id): Path<String>,
) -> Result<Json<Report>, ErrorResponse> {
    state
        .reports
        .get_authority_report(&caller, &report_id)
        .await
        .map(Json)
        .into_response_error()
}

async fn update_report(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(report_id): Path<String>,
    payload: Result<Json<UpdateReportRequest>, JsonRejection>,
) -> Result<Json<Report>, ErrorResponse> {
    let request = payload.into_response_error()?;
    state
        .reports
        .update_authority_report(&caller, &report_id, request)
        .await
        .map(Json)
        .into_response_error()
}

async fn delete_report(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(report_id): Path<String>,
) -> Result<Json<Value>, ErrorResponse> {
    state
        .reports
        .delete_authority_report(&caller, &report_id)
        .await
        .into_response_error()?;
    Ok(Json(json!({ "success": true })))
}

async fn get_report_legacy(
    state: State<AppState>,
    auth: AuthUser,
    Path((_authority, report_id)): Path<(String, String)>,
) -> Result<Json<Report>, ErrorResponse> {
    get_report(state, auth, Path(report_id)).await
}

async fn update_report_legacy(
    state: State<AppState>,
    auth: AuthUser,
    Path((_authority, report_id)): Path<(String, String)>,
    payload: Result<Json<UpdateReportRequest>, JsonRejection>,
) -> Result<Json<Report>, ErrorResponse> {
    update_report(state, auth, Path(report_id), payload).await
}

async fn delete_report_legacy(
    state: State<AppState>,
    auth: AuthUser,
    Path((_authority, report_id)): Path<(String, String)>,
) -> Result<Json<Value>, ErrorResponse> {
    delete_report(state, auth, Path(report_id)).await
}
