//! Report listing and submission for any authenticated caller

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::{get, post},
};

use report_desk::{CreateReportRequest, Report};

use crate::error::{ErrorResponse, IntoResponseError};
use crate::session::AuthUser;
use crate::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/reports", get(list_reports))
        .route("/report/new", post(create_report))
}

async fn list_reports(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> Result<Json<Vec<Report>>, ErrorResponse> {
    state
        .reports
        .list_reports(&caller)
        .await
        .map(Json)
        .into_response_error()
}

async fn create_report(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<CreateReportRequest>, JsonRejection>,
) -> Result<Json<Report>, ErrorResponse> {
    let request = payload.into_response_error()?;
    state
        .reports
        .create_report(&caller, request)
        .await
        .map(Json)
        .into_response_error()
}
