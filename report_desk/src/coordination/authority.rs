//! Administrative authority management
//!
//! Authorities have no HTTP creation route; they are created by operators,
//! typically through `SEED_AUTHORITIES` at startup.

use crate::authority::{Authority, AuthorityStore};

use super::errors::CoordinationError;

/// Create an authority with a caller-chosen id
#[tracing::instrument]
pub async fn create_authority(id: &str, name: &str) -> Result<Authority, CoordinationError> {
    Ok(AuthorityStore::create_authority(Authority::new(id.trim(), name.trim())).await?)
}

/// All authorities in creation order, without membership lists
pub async fn list_authorities() -> Result<Vec<Authority>, CoordinationError> {
    Ok(AuthorityStore::get_all_authorities().await?)
}

/// Remove an authority. Members and reports keep their now-dangling reference.
#[tracing::instrument]
pub async fn delete_authority(id: &str) -> Result<(), CoordinationError> {
    if !AuthorityStore::delete_authority(id).await? {
        return Err(CoordinationError::ResourceNotFound {
            resource_type: "Authority".to_string(),
            resource_id: id.to_string(),
        }
        .log());
    }
    Ok(())
}

/// Parse `id:name,id:name` into pairs. Empty segments are skipped.
pub fn parse_authority_seed(seed: &str) -> Result<Vec<(String, String)>, CoordinationError> {
    seed.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((id, name)) if !id.trim().is_empty() && !name.trim().is_empty() => {
                Ok((id.trim().to_string(), name.trim().to_string()))
            }
            _ => Err(CoordinationError::Validation(format!(
                "Invalid authority seed entry '{entry}', expected id:name"
            ))
            .log()),
        })
        .collect()
}

/// Create every authority in `seed` that does not exist yet; returns how many were created
pub async fn seed_authorities(seed: &str) -> Result<usize, CoordinationError> {
    let mut created = 0;
    for (id, name) in parse_authority_seed(seed)? {
        if AuthorityStore::get_authority(&id).await?.is_some() {
            tracing::debug!(authority_id = %id, "Authority already present, skipping seed");
            continue;
        }
        create_authority(&id, &name).await?;
        created += 1;
    }
    Ok(created)
}
