use axum::{
    Json,
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use http::StatusCode;
use serde::Serialize;

use report_desk::CoordinationError;

/// JSON error body returned by every endpoint
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

/// An HTTP status paired with an `{"error": ...}` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: StatusCode,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn unauthenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Not authenticated")
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<CoordinationError> for ErrorResponse {
    fn from(e: CoordinationError) -> Self {
        let status = match &e {
            CoordinationError::Unauthenticated
            | CoordinationError::Unauthorized
            | CoordinationError::Authentication(_) => StatusCode::UNAUTHORIZED,
            CoordinationError::Validation(_) => StatusCode::BAD_REQUEST,
            CoordinationError::Conflict(_) => StatusCode::CONFLICT,
            CoordinationError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Storage details stay in the logs
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", e);
            "Internal server error".to_string()
        } else {
            e.to_string()
        };

        Self::new(status, message)
    }
}

/// Malformed or mistyped JSON bodies are client errors
impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected JSON body: {}", rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, rejection.body_text())
    }
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse>;
}

impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(ErrorResponse::from)
    }
}

impl<T> IntoResponseError<T> for Result<Json<T>, JsonRejection> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map(|Json(body)| body).map_err(ErrorResponse::from)
    }
}
