//! Error types for the report coordination layer

use thiserror::Error;

use crate::authority::AuthorityError;
use crate::report::ReportError;
use crate::session::SessionError;
use crate::userdb::UserError;
use crate::utils::UtilError;

/// Errors surfaced by the report service and the identity provider
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// No valid session accompanies the request
    #[error("Not authenticated")]
    Unauthenticated,

    /// Caller is authenticated but lacks the rights for the operation
    #[error("Unauthorized access")]
    Unauthorized,

    /// Credentials presented at login were wrong
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Request payload failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflict error
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found with context
    #[error("Resource not found: {resource_type} {resource_id}")]
    ResourceNotFound {
        resource_type: String,
        resource_id: String,
    },

    /// Error from the user database operations
    #[error("User error: {0}")]
    UserError(UserError),

    /// Error from authority operations
    #[error("Authority error: {0}")]
    AuthorityError(AuthorityError),

    /// Error from report repository operations
    #[error("Report error: {0}")]
    ReportError(ReportError),

    /// Error from Session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    UtilsError(UtilError),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// Client-caused errors are logged at debug level, everything else at error level.
    pub fn log(self) -> Self {
        match &self {
            Self::Unauthenticated => tracing::debug!("Not authenticated"),
            Self::Unauthorized => tracing::debug!("Unauthorized access"),
            Self::Authentication(msg) => tracing::debug!("Authentication error: {}", msg),
            Self::Validation(msg) => tracing::debug!("Validation error: {}", msg),
            Self::Conflict(msg) => tracing::debug!("Conflict: {}", msg),
            Self::ResourceNotFound {
                resource_type,
                resource_id,
            } => tracing::debug!("Resource not found: {} {}", resource_type, resource_id),
            Self::UserError(err) => tracing::error!("User error: {}", err),
            Self::AuthorityError(err) => tracing::error!("Authority error: {}", err),
            Self::ReportError(err) => tracing::error!("Report error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
            Self::UtilsError(err) => tracing::error!("Utils error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<UserError> for CoordinationError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Conflict(msg) => Self::Conflict(msg),
            UserError::InvalidData(msg) => Self::Validation(msg),
            err => Self::UserError(err),
        }
        .log()
    }
}

impl From<AuthorityError> for CoordinationError {
    fn from(err: AuthorityError) -> Self {
        match err {
            AuthorityError::Conflict(msg) => Self::Conflict(msg),
            AuthorityError::InvalidData(msg) => Self::Validation(msg),
            err => Self::AuthorityError(err),
        }
        .log()
    }
}

impl From<ReportError> for CoordinationError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::Conflict(msg) => Self::Conflict(msg),
            ReportError::InvalidData(msg) => Self::Validation(msg),
            err => Self::ReportError(err),
        }
        .log()
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        Self::SessionError(err).log()
    }
}

impl From<UtilError> for CoordinationError {
    fn from(err: UtilError) -> Self {
        Self::UtilsError(err).log()
    }
}
