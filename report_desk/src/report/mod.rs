mod errors;
mod repository;
mod storage;
mod types;

pub use errors::ReportError;
pub use repository::{InMemoryReportRepository, ReportRepository};
pub(crate) use storage::DB_TABLE_REPORTS;
pub use storage::SqlReportRepository;
pub use types::{Report, ReportFilter};

pub(crate) async fn init() -> Result<(), ReportError> {
    SqlReportRepository::init().await
}
