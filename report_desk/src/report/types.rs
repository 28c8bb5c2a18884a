use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A submitted report, scoped to an authority
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Report {
    #[serde(skip_serializing)]
    pub sequence_number: Option<i64>,
    pub id: String,
    pub title: String,
    pub details: String,
    /// Id of the user who submitted the report
    pub author: String,
    pub authority: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Report {
    pub fn new(
        id: String,
        title: String,
        details: String,
        author: String,
        authority: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sequence_number: None,
            id,
            title,
            details,
            author,
            authority,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Selection predicate shared by every repository backend.
///
/// SQL backends translate it into a `WHERE` clause through [`ReportFilter::column`];
/// in-memory backends evaluate [`ReportFilter::matches`] directly. Both must agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFilter {
    All,
    Id(String),
    Authority(String),
    Author(String),
}

impl ReportFilter {
    pub fn matches(&self, report: &Report) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::Id(id) => report.id == *id,
            ReportFilter::Authority(authority) => report.authority.as_deref() == Some(authority),
            ReportFilter::Author(author) => report.author == *author,
        }
    }

    /// Column and bound value for SQL backends, `None` for an unfiltered scan
    pub(crate) fn column(&self) -> Option<(&'static str, &str)> {
        match self {
            ReportFilter::All => None,
            ReportFilter::Id(v) => Some(("id", v)),
            ReportFilter::Authority(v) => Some(("authority", v)),
            ReportFilter::Author(v) => Some(("author", v)),
        }
    }
}

impl std::fmt::Display for ReportFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column() {
            Some((column, value)) => write!(f, "{column}={value}"),
            None => f.write_str("all"),
        }
    }
}
