use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum ReportError {
    #[error("Report not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for ReportError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                ReportError::Conflict("Report id already exists".to_string())
            }
            _ => ReportError::Storage(err.to_string()),
        }
    }
}
