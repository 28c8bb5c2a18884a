mod auth;
mod authority;
mod error;
mod reports;
mod router;
mod session;
mod state;

pub use error::{ErrorBody, ErrorResponse, IntoResponseError};
pub use router::{report_desk_router, report_desk_router_no_trace};
pub use session::AuthUser;
pub use state::{AppState, SharedReportService};

// Re-export initialization and seeding from report-desk
pub use report_desk::{init, seed_authorities};
