use async_trait::async_trait;

use crate::report::{
    errors::ReportError,
    repository::ReportRepository,
    types::{Report, ReportFilter},
};
use crate::storage::GENERIC_DATA_STORE;

use super::postgres::*;
use super::sqlite::*;

/// Report repository backed by the configured SQL data store
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlReportRepository;

impl SqlReportRepository {
    /// Initialize the report table
    pub(crate) async fn init() -> Result<(), ReportError> {
        let store = GENERIC_DATA_STORE.lock().await;

        match (store.as_sqlite(), store.as_postgres()) {
            (Some(pool), _) => {
                create_tables_sqlite(pool).await?;
                validate_report_tables_sqlite(pool).await?;
                Ok(())
            }
            (_, Some(pool)) => {
                create_tables_postgres(pool).await?;
                validate_report_tables_postgres(pool).await?;
                Ok(())
            }
            _ => Err(ReportError::Storage("Unsupported database type".to_string())),
        }
    }
}

#[async_trait]
impl ReportRepository for SqlReportRepository {
    #[tracing::instrument(skip(self, report), fields(report_id = %report.id))]
    async fn create(&self, report: Report) -> Result<Report, ReportError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            insert_report_sqlite(pool, report).await
        } else if let Some(pool) = store.as_postgres() {
            insert_report_postgres(pool, report).await
        } else {
            Err(ReportError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(skip(self), fields(filter = %filter))]
    async fn find_many(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let result = if let Some(pool) = store.as_sqlite() {
            find_reports_sqlite(pool, filter).await
        } else if let Some(pool) = store.as_postgres() {
            find_reports_postgres(pool, filter).await
        } else {
            Err(ReportError::Storage("Unsupported database type".to_string()))
        };

        if let Ok(reports) = &result {
            tracing::debug!(count = reports.len(), "Report query completed");
        }

        result
    }

    #[tracing::instrument(skip(self, details), fields(report_id = %id))]
    async fn update_details(
        &self,
        id: &str,
        details: &str,
    ) -> Result<Option<Report>, ReportError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            update_report_details_sqlite(pool, id, details).await
        } else if let Some(pool) = store.as_postgres() {
            update_report_details_postgres(pool, id, details).await
        } else {
            Err(ReportError::Storage("Unsupported database type".to_string()))
        }
    }

    #[tracing::instrument(skip(self), fields(report_id = %id))]
    async fn delete_by_id(&self, id: &str) -> Result<bool, ReportError> {
        let store = GENERIC_DATA_STORE.lock().await;

        let affected = if let Some(pool) = store.as_sqlite() {
            delete_report_sqlite(pool, id).await
        } else if let Some(pool) = store.as_postgres() {
            delete_report_postgres(pool, id).await
        } else {
            Err(ReportError::Storage("Unsupported database type".to_string()))
        }?;

        Ok(affected > 0)
    }

    async fn count(&self) -> Result<i64, ReportError> {
        let store = GENERIC_DATA_STORE.lock().await;

        if let Some(pool) = store.as_sqlite() {
            count_reports_sqlite(pool).await
        } else if let Some(pool) = store.as_postgres() {
            count_reports_postgres(pool).await
        } else {
            Err(ReportError::Storage("Unsupported database type".to_string()))
        }
    }
}
