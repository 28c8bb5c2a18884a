use sqlx::{Pool, Sqlite};

use crate::authority::{errors::AuthorityError, types::Authority};
use crate::report::DB_TABLE_REPORTS;
use crate::storage::validate_sqlite_table_schema;
use crate::userdb::DB_TABLE_USERS;

use super::config::DB_TABLE_AUTHORITIES;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), AuthorityError> {
    let table_name = DB_TABLE_AUTHORITIES.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            created_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| AuthorityError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_authority_tables_sqlite(
    pool: &Pool<Sqlite>,
) -> Result<(), AuthorityError> {
    let expected_columns = vec![
        ("sequence_number", "INTEGER"),
        ("id", "TEXT"),
        ("name", "TEXT"),
        ("created_at", "TIMESTAMP"),
    ];

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_AUTHORITIES.as_str(),
        &expected_columns,
        AuthorityError::Storage,
    )
    .await
}

pub(super) async fn insert_authority_sqlite(
    pool: &Pool<Sqlite>,
    authority: Authority,
) -> Result<Authority, AuthorityError> {
    let table_name = DB_TABLE_AUTHORITIES.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (id, name, created_at) VALUES (?, ?, ?)
        "#
    ))
    .bind(&authority.id)
    .bind(&authority.name)
    .bind(authority.created_at)
    .execute(pool)
    .await?;

    get_authority_sqlite(pool, &authority.id)
        .await?
        .ok_or(AuthorityError::NotFound)
}

pub(super) async fn get_authority_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
) -> Result<Option<Authority>, AuthorityError> {
    let table_name = DB_TABLE_AUTHORITIES.as_str();

    let authority = sqlx::query_as::<_, Authority>(&format!(
        r#"
        SELECT * FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match authority {
        Some(mut authority) => {
            authority.users = member_ids_sqlite(pool, DB_TABLE_USERS.as_str(), id).await?;
            authority.reports = member_ids_sqlite(pool, DB_TABLE_REPORTS.as_str(), id).await?;
            Ok(Some(authority))
        }
        None => Ok(None),
    }
}

/// Ids of rows in `table_name` whose `authority` column points at `authority_id`
async fn member_ids_sqlite(
    pool: &Pool<Sqlite>,
    table_name: &str,
    authority_id: &str,
) -> Result<Vec<String>, AuthorityError> {
    sqlx::query_scalar::<_, String>(&format!(
        r#"
        SELECT id FROM {table_name} WHERE authority = ? ORDER BY sequence_number ASC
        "#
    ))
    .bind(authority_id)
    .fetch_all(pool)
    .await
    .map_err(AuthorityError::from)
}

pub(super) async fn get_all_authorities_sqlite(
    pool: &Pool<Sqlite>,
) -> Result<Vec<Authority>, AuthorityError> {
    let table_name = DB_TABLE_AUTHORITIES.as_str();

    sqlx::query_as::<_, Authority>(&format!(
        r#"
        SELECT * FROM {table_name} ORDER BY sequence_number ASC
        "#
    ))
    .fetch_all(pool)
    .await
    .map_err(AuthorityError::from)
}

pub(super) async fn delete_authority_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
) -> Result<u64, AuthorityError> {
    let table_name = DB_TABLE_AUTHORITIES.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE id = ?
        "#
    ))
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
