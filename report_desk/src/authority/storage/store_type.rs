use crate::authority::{errors::AuthorityError, types::Authority};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

pub(crate) struct AuthorityStore;

impl AuthorityStore {
    /// Initialize the authority table
    pub(crate) async fn init() -> Result<(), AuthorityError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_authority_tables_sqlite(pool).await?;
                Ok(())
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_authority_tables_postgres(pool).await?;
                Ok(())
            }
            _ => Err(AuthorityError::Storage(
                "Unsupported database type".to_string(),
            )),
        }
    }

    #[tracing::instrument(skip(authority), fields(authority_id = %authority.id))]
    pub(crate) async fn create_authority(authority: Authority) -> Result<Authority, AuthorityError> {
        if authority.id.trim().is_empty() || authority.name.trim().is_empty() {
            return Err(AuthorityError::InvalidData(
                "Authority id and name are required".to_string(),
            ));
        }

        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            insert_authority_sqlite(pool, authority).await
        } else if let Some(pool) = store.as_postgres() {
            insert_authority_postgres(pool, authority).await
        } else {
            Err(AuthorityError::Storage(
                "Unsupported database type".to_string(),
            ))
        };

        match &result {
            Ok(authority) => tracing::info!(name = %authority.name, "Authority created"),
            Err(e) => tracing::warn!(error = %e, "Authority creation failed"),
        }

        result
    }

    /// Load an authority together with its member and report ids
    #[tracing::instrument(fields(authority_id = %id))]
    pub(crate) async fn get_authority(id: &str) -> Result<Option<Authority>, AuthorityError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_authority_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            get_authority_postgres(pool, id).await
        } else {
            Err(AuthorityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    /// List authorities without the derived membership lists
    pub(crate) async fn get_all_authorities() -> Result<Vec<Authority>, AuthorityError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            get_all_authorities_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            get_all_authorities_postgres(pool).await
        } else {
            Err(AuthorityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }
    }

    pub(crate) async fn delete_authority(id: &str) -> Result<bool, AuthorityError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let affected = if let Some(pool) = store.as_sqlite() {
            delete_authority_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_authority_postgres(pool, id).await
        } else {
            Err(AuthorityError::Storage(
                "Unsupported database type".to_string(),
            ))
        }?;

        Ok(affected > 0)
    }
}
