use std::sync::Arc;

use report_desk::{
    IdentityProvider, ReportRepository, ReportService, SessionIdentityProvider,
    SqlReportRepository,
};

/// Shared report service over a type-erased repository
pub type SharedReportService = ReportService<Arc<dyn ReportRepository>>;

/// Router state: who is calling, and what they may do with reports
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub reports: Arc<SharedReportService>,
}

impl AppState {
    /// State with the listing policy taken from `REPORT_LIST_SCOPE`
    pub fn new(identity: Arc<dyn IdentityProvider>, repository: Arc<dyn ReportRepository>) -> Self {
        Self::with_service(identity, ReportService::new(repository))
    }

    pub fn with_service(identity: Arc<dyn IdentityProvider>, reports: SharedReportService) -> Self {
        Self {
            identity,
            reports: Arc::new(reports),
        }
    }
}

impl Default for AppState {
    /// Session-based identity over the configured SQL data store
    fn default() -> Self {
        Self::new(
            Arc::new(SessionIdentityProvider::new()),
            Arc::new(SqlReportRepository),
        )
    }
}
