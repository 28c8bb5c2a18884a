use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::report::{
    errors::ReportError,
    types::{Report, ReportFilter},
};
use crate::storage::validate_sqlite_table_schema;

use super::config::DB_TABLE_REPORTS;

pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), ReportError> {
    let table_name = DB_TABLE_REPORTS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            sequence_number INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            details TEXT NOT NULL,
            author TEXT NOT NULL,
            authority TEXT,
            created_at TIMESTAMP NOT NULL,
            updated_at TIMESTAMP NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await
    .map_err(|e| ReportError::Storage(e.to_string()))?;

    sqlx::query(&format!(
        "CREATE INDEX IF NOT EXISTS idx_{table_name}_authority ON {table_name}(authority)"
    ))
    .execute(pool)
    .await
    .map_err(|e| ReportError::Storage(e.to_string()))?;

    Ok(())
}

pub(super) async fn validate_report_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), ReportError> {
    let expected_columns = vec![
        ("sequence_number", "INTEGER"),
        ("id", "TEXT"),
        ("title", "TEXT"),
        ("details", "TEXT"),
        ("author", "TEXT"),
        ("authority", "TEXT"),
        ("created_at", "TIMESTAMP"),
        ("updated_at", "TIMESTAMP"),
    ];

    validate_sqlite_table_schema(
        pool,
        DB_TABLE_REPORTS.as_str(),
        &expected_columns,
        ReportError::Storage,
    )
    .await
}

pub(super) async fn insert_report_sqlite(
    pool: &Pool<Sqlite>,
    report: Report,
) -> Result<Report, ReportError> {
    let table_name = DB_TABLE_REPORTS.as_str();

    sqlx::query(&format!(
        r#"
        INSERT INTO {table_name}
            (id, title, details, author, authority, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#
    ))
    .bind(&report.id)
    .bind(&report.title)
    .bind(&report.details)
    .bind(&report.author)
    .bind(&report.authority)
    .bind(report.created_at)
    .bind(report.updated_at)
    .execute(pool)
    .await?;

    find_reports_sqlite(pool, &ReportFilter::Id(report.id))
        .await?
        .into_iter()
        .next()
        .ok_or(ReportError::NotFound)
}

pub(super) async fn find_reports_sqlite(
    pool: &Pool<Sqlite>,
    filter: &ReportFilter,
) -> Result<Vec<Report>, ReportError> {
    let table_name = DB_TABLE_REPORTS.as_str();

    match filter.column() {
        Some((column, value)) => sqlx::query_as::<_, Report>(&format!(
            r#"
            SELECT * FROM {table_name} WHERE {column} = ? ORDER BY sequence_number ASC
            "#
        ))
        .bind(value)
        .fetch_all(pool)
        .await
        .map_err(ReportError::from),
        None => sqlx::query_as::<_, Report>(&format!(
            r#"
            SELECT * FROM {table_name} ORDER BY sequence_number ASC
            "#
        ))
        .fetch_all(pool)
        .await
        .map_err(ReportError::from),
    }
}

pub(super) async fn update_report_details_sqlite(
    pool: &Pool<Sqlite>,
    id: &str,
    details: &str,
) -> Result<Option<Report>, ReportError> {
    let table_name = DB_TABLE_REPORTS.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name} SET details = ?, updated_at = ? WHERE id = ?
        "#
    ))
    .bind(details)
    .bind(Utc::now())
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    Ok(find_reports_sqlite(pool, &ReportFilter::Id(id.to_string()))
        .await?
        .into_iter()
        .next())
}

pub(super) async fn delete_report_sqlite(pool: &Pool<Sqlite>, id: &str) -> Result<u64, ReportError> {
    let table_name = DB_TABLE_REPORTS.as_str();

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

pub(super) async fn count_reports_sqlite(pool: &Pool<Sqlite>) -> Result<i64, ReportError> {
    let table_name = DB_TABLE_REPORTS.as_str();

    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table_name}"))
        .fetch_one(pool)
        .await
        .map_err(ReportError::from)
}
