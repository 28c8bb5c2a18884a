use serde::Deserialize;
use std::str::FromStr;

/// Visibility of `GET /reports` for callers without authority rights
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingPolicy {
    /// Every stored report
    #[default]
    All,
    /// Only reports the caller authored
    Own,
}

impl FromStr for ListingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(ListingPolicy::All),
            "own" => Ok(ListingPolicy::Own),
            other => Err(format!("Unknown listing policy: {other}")),
        }
    }
}

/// Payload of `POST /report/new`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReportRequest {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub authority: Option<String>,
}

/// Payload of `PUT /authority/reports/{report_id}`; only `details` is writable
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReportRequest {
    #[serde(default)]
    pub details: Option<String>,
}
