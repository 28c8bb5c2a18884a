use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::errors::ReportError;
use super::types::{Report, ReportFilter};

/// Durable CRUD over reports
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn create(&self, report: Report) -> Result<Report, ReportError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Report>, ReportError> {
        Ok(self
            .find_many(&ReportFilter::Id(id.to_string()))
            .await?
            .into_iter()
            .next())
    }

    /// Matching reports in creation order
    async fn find_many(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportError>;

    /// Replace `details`, returning the updated report or `None` when absent
    async fn update_details(
        &self,
        id: &str,
        details: &str,
    ) -> Result<Option<Report>, ReportError>;

    /// Returns `true` when a report was removed
    async fn delete_by_id(&self, id: &str) -> Result<bool, ReportError>;

    async fn count(&self) -> Result<i64, ReportError>;
}

/// Lets a shared, type-erased repository back a `ReportService`
#[async_trait]
impl<T: ReportRepository + ?Sized> ReportRepository for Arc<T> {
    async fn create(&self, report: Report) -> Result<Report, ReportError> {
        (**self).create(report).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Report>, ReportError> {
        (**self).find_by_id(id).await
    }

    async fn find_many(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportError> {
        (**self).find_many(filter).await
    }

    async fn update_details(
        &self,
        id: &str,
        details: &str,
    ) -> Result<Option<Report>, ReportError> {
        (**self).update_details(id, details).await
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ReportError> {
        (**self).delete_by_id(id).await
    }

    async fn count(&self) -> Result<i64, ReportError> {
        (**self).count().await
    }
}

/// Process-local repository, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct InMemoryReportRepository {
    inner: Mutex<InMemoryReports>,
}

#[derive(Debug, Default)]
struct InMemoryReports {
    next_sequence: i64,
    reports: Vec<Report>,
}

impl InMemoryReportRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReportRepository for InMemoryReportRepository {
    async fn create(&self, mut report: Report) -> Result<Report, ReportError> {
        let mut inner = self.inner.lock().await;

        if inner.reports.iter().any(|r| r.id == report.id) {
            return Err(ReportError::Conflict("Report id already exists".to_string()));
        }

        inner.next_sequence += 1;
        report.sequence_number = Some(inner.next_sequence);
        inner.reports.push(report.clone());
        Ok(report)
    }

    async fn find_many(&self, filter: &ReportFilter) -> Result<Vec<Report>, ReportError> {
        let inner = self.inner.lock().await;
        Ok(inner
            .reports
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    async fn update_details(
        &self,
        id: &str,
        details: &str,
    ) -> Result<Option<Report>, ReportError> {
        let mut inner = self.inner.lock().await;

        Ok(inner.reports.iter_mut().find(|r| r.id == id).map(|r| {
            r.details = details.to_string();
            r.updated_at = chrono::Utc::now();
            r.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ReportError> {
        let mut inner = self.inner.lock().await;
        let before = inner.reports.len();
        inner.reports.retain(|r| r.id != id);
        Ok(inner.reports.len() < before)
    }

    async fn count(&self) -> Result<i64, ReportError> {
        Ok(self.inner.lock().await.reports.len() as i64)
    }
}
