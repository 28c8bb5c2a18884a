//! Report coordination module
//!
//! High-level operations that combine the resolved caller, the authorization
//! rule and the report repository. This is the main entry point used by the
//! HTTP layer.
//!
//! - `admin`: operator queries over accounts
//! - `authority`: administrative authority management
//! - `errors`: error taxonomy shared with the identity provider
//! - `reports`: the authority-scoped report service

mod admin;
mod authority;
mod errors;
mod reports;
mod types;

pub use admin::{count_users, get_all_users, get_authority_members};
pub use authority::{
    create_authority, delete_authority, list_authorities, parse_authority_seed, seed_authorities,
};
pub use errors::CoordinationError;
pub use reports::{ReportService, can_manage_report};
pub use types::{CreateReportRequest, ListingPolicy, UpdateReportRequest};
