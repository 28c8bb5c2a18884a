use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An organizational scope that owns reports and groups users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Authority {
    #[serde(skip_serializing)]
    pub sequence_number: Option<i64>,
    pub id: String,
    pub name: String,
    /// Member user ids, derived from `users.authority`
    #[sqlx(skip)]
    #[serde(default)]
    pub users: Vec<String>,
    /// Report ids, derived from `reports.authority`
    #[sqlx(skip)]
    #[serde(default)]
    pub reports: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Authority {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            sequence_number: None,
            id: id.into(),
            name: name.into(),
            users: Vec::new(),
            reports: Vec::new(),
            created_at: Utc::now(),
        }
    }
}
