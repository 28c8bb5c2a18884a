use thiserror::Error;

#[derive(Clone, Error, Debug)]
pub enum AuthorityError {
    #[error("Authority not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for AuthorityError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AuthorityError::Conflict("Authority id already exists".to_string())
            }
            _ => AuthorityError::Storage(err.to_string()),
        }
    }
}
