mod config;
mod postgres;
mod sqlite;
mod store_type;

pub(crate) use config::DB_TABLE_REPORTS;
pub use store_type::SqlReportRepository;
