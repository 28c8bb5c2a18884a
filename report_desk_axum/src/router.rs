//! Combined router for all report-desk endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Create the router for every endpoint, with HTTP tracing
///
/// - `POST /sign-up`, `POST /login`, `POST /logout`
/// - `GET /reports`, `POST /report/new`
/// - `GET /authority`, `GET /authority/reports`
/// - `GET|PUT|DELETE /authority/reports/{report_id}`
pub fn report_desk_router(state: AppState) -> Router {
    report_desk_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as [`report_desk_router`] but without the HTTP tracing middleware
pub fn report_desk_router_no_trace(state: AppState) -> Router {
    Router::new()
        .merge(super::auth::router())
        .merge(super::reports::router())
        .merge(super::authority::router())
        .with_state(state)
}
