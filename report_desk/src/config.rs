//! Central configuration for the report-desk crate

use std::sync::LazyLock;

use crate::coordination::ListingPolicy;

/// Which reports `GET /reports` returns to a plain caller.
///
/// `all` (default) lists every report, `own` only the caller's.
pub static REPORT_LIST_SCOPE: LazyLock<ListingPolicy> = LazyLock::new(|| {
    parse_list_scope(std::env::var("REPORT_LIST_SCOPE").ok().as_deref())
});

fn parse_list_scope(value: Option<&str>) -> ListingPolicy {
    match value {
        None => ListingPolicy::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid REPORT_LIST_SCOPE '{}', falling back to 'all'", raw);
            ListingPolicy::default()
        }),
    }
}
