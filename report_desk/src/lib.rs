//! report-desk - authority-scoped report management
//!
//! This crate holds the report service, the identity provider and the storage
//! layers behind them. HTTP integration lives in `report-desk-axum`.

mod authority;
mod config;
mod coordination;
mod identity;
mod report;
mod session;
mod storage;
mod userdb;
mod utils;

#[cfg(test)]
mod test_utils;

pub use coordination::{
    CoordinationError, CreateReportRequest, ListingPolicy, ReportService, UpdateReportRequest,
    can_manage_report, count_users, create_authority, delete_authority, get_all_users,
    get_authority_members, list_authorities, parse_authority_seed, seed_authorities,
};

pub use config::REPORT_LIST_SCOPE;

pub use identity::{
    ALLOW_PRIVILEGED_SIGN_UP, Caller, IdentityProvider, LoginRequest, PASSWORD_MIN_LENGTH,
    SessionGrant, SessionIdentityProvider, SignUpRequest,
};

pub use authority::{Authority, AuthorityError};
pub use report::{
    InMemoryReportRepository, Report, ReportError, ReportFilter, ReportRepository,
    SqlReportRepository,
};
pub use userdb::{AccessLevel, User, UserError};

pub use session::{SESSION_COOKIE_MAX_AGE, SESSION_COOKIE_NAME, SessionError};
pub use storage::StorageError;
pub use utils::UtilError;

/// Initialize the stores and create the tables
pub async fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    storage::init().await?;
    userdb::init().await?;
    authority::init().await?;
    report::init().await?;
    Ok(())
}
