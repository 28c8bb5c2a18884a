use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

use super::errors::UserError;

/// Role flag distinguishing plain users from authority admins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    User,
    Admin,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::User => "user",
            AccessLevel::Admin => "admin",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(AccessLevel::User),
            "admin" => Ok(AccessLevel::Admin),
            other => Err(UserError::InvalidData(format!(
                "Unknown access level: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for AccessLevel {
    type Error = UserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A registered account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct User {
    /// Database-assigned sequence number
    #[serde(skip_serializing)]
    pub sequence_number: Option<i64>,
    pub id: String,
    pub username: String,
    pub email: String,
    /// Argon2 PHC string; never leaves the process
    #[serde(skip)]
    pub password_hash: String,
    /// Authority the user belongs to, if any
    pub authority: Option<String>,
    #[sqlx(try_from = "String")]
    pub access_level: AccessLevel,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(id: String, username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            sequence_number: None,
            id,
            username,
            email,
            password_hash,
            authority: None,
            access_level: AccessLevel::User,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Search field options for user lookup
#[derive(Debug, Clone)]
pub enum UserSearchField {
    Id(String),
    Username(String),
    Email(String),
}

impl UserSearchField {
    pub(crate) fn column(&self) -> &'static str {
        match self {
            UserSearchField::Id(_) => "id",
            UserSearchField::Username(_) => "username",
            UserSearchField::Email(_) => "email",
        }
    }

    pub(crate) fn value(&self) -> &str {
        match self {
            UserSearchField::Id(v) | UserSearchField::Username(v) | UserSearchField::Email(v) => v,
        }
    }
}

impl fmt::Display for UserSearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.column(), self.value())
    }
}
