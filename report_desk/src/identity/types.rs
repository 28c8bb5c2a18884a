use http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::userdb::{AccessLevel, User};

/// Sign-up payload. Missing fields deserialize as empty and are rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignUpRequest {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub authority: Option<String>,
    #[serde(default, alias = "accessLevel")]
    pub access_level: Option<AccessLevel>,
}

/// Login payload; either `username` or `email` identifies the account
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: String,
}

/// Result of a successful sign-up or login
#[derive(Debug, Clone)]
pub struct SessionGrant {
    pub user: User,
    /// `Set-Cookie` headers carrying the new session id
    pub headers: HeaderMap,
}

/// The resolved identity of an authenticated request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caller {
    pub id: String,
    pub username: String,
    pub access_level: AccessLevel,
    pub authority: Option<String>,
}

impl Caller {
    /// The authority this caller administers, if any
    pub fn admin_authority(&self) -> Option<&str> {
        match self.access_level {
            AccessLevel::Admin => self.authority.as_deref(),
            AccessLevel::User => None,
        }
    }
}

impl From<User> for Caller {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            access_level: user.access_level,
            authority: user.authority,
        }
    }
}
