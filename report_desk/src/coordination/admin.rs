//! Operator queries over accounts
//!
//! Not reachable over HTTP; intended for tooling built on the library.

use crate::userdb::{User, UserStore};

use super::errors::CoordinationError;

pub async fn get_all_users() -> Result<Vec<User>, CoordinationError> {
    Ok(UserStore::get_all_users().await?)
}

/// Users whose `authority` is `authority_id`
pub async fn get_authority_members(authority_id: &str) -> Result<Vec<User>, CoordinationError> {
    Ok(UserStore::get_users_by_authority(authority_id).await?)
}

pub async fn count_users() -> Result<i64, CoordinationError> {
    Ok(UserStore::count_users().await?)
}
