//! Authority-scoped report operations
//!
//! Every operation receives an already resolved [`Caller`]. Operations under
//! `/authority/reports` require an admin with an authority, and single-report
//! operations additionally require the report to belong to that authority.
//! The authority always comes from the caller, never from the request path.

use crate::authority::{Authority, AuthorityStore};
use crate::config::REPORT_LIST_SCOPE;
use crate::identity::Caller;
use crate::report::{Report, ReportFilter, ReportRepository};

use super::errors::CoordinationError;
use super::types::{CreateReportRequest, ListingPolicy, UpdateReportRequest};

/// True when `caller` may read or modify `report`
pub fn can_manage_report(caller: &Caller, report: &Report) -> bool {
    match (caller.admin_authority(), report.authority.as_deref()) {
        (Some(own), Some(target)) => own == target,
        _ => false,
    }
}

/// The caller's administered authority, or `Unauthorized`
fn require_authority_admin(caller: &Caller) -> Result<&str, CoordinationError> {
    caller.admin_authority().ok_or_else(|| {
        tracing::debug!(
            user_id = %caller.id,
            access_level = %caller.access_level,
            has_authority = caller.authority.is_some(),
            "Caller is not an authority admin"
        );
        CoordinationError::Unauthorized.log()
    })
}

fn report_not_found(report_id: &str) -> CoordinationError {
    CoordinationError::ResourceNotFound {
        resource_type: "Report".to_string(),
        resource_id: report_id.to_string(),
    }
    .log()
}

/// Report lifecycle behind the authority-admin rule
pub struct ReportService<R: ReportRepository> {
    repository: R,
    listing: ListingPolicy,
}

impl<R: ReportRepository> ReportService<R> {
    /// Service with the listing policy taken from `REPORT_LIST_SCOPE`
    pub fn new(repository: R) -> Self {
        Self::with_listing_policy(repository, *REPORT_LIST_SCOPE)
    }

    pub fn with_listing_policy(repository: R, listing: ListingPolicy) -> Self {
        Self {
            repository,
            listing,
        }
    }

    pub fn listing_policy(&self) -> ListingPolicy {
        self.listing
    }

    /// Load a report the caller is allowed to manage
    async fn load_managed_report(
        &self,
        caller: &Caller,
        report_id: &str,
    ) -> Result<Report, CoordinationError> {
        require_authority_admin(caller)?;

        let report = self
            .repository
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| report_not_found(report_id))?;

        if !can_manage_report(caller, &report) {
            tracing::debug!(
                user_id = %caller.id,
                report_id = %report_id,
                "Report belongs to a different authority"
            );
            return Err(CoordinationError::Unauthorized.log());
        }

        Ok(report)
    }

    /// Reports visible to any authenticated caller under the listing policy
    #[tracing::instrument(skip(self, caller), fields(user_id = %caller.id))]
    pub async fn list_reports(&self, caller: &Caller) -> Result<Vec<Report>, CoordinationError> {
        let filter = match self.listing {
            ListingPolicy::All => ReportFilter::All,
            ListingPolicy::Own => ReportFilter::Author(caller.id.clone()),
        };
        Ok(self.repository.find_many(&filter).await?)
    }

    /// Every report of the caller's authority
    #[tracing::instrument(skip(self, caller), fields(user_id = %caller.id))]
    pub async fn list_authority_reports(
        &self,
        caller: &Caller,
    ) -> Result<Vec<Report>, CoordinationError> {
        let authority = require_authority_admin(caller)?;
        Ok(self
            .repository
            .find_many(&ReportFilter::Authority(authority.to_string()))
            .await?)
    }

    #[tracing::instrument(skip(self, caller), fields(user_id = %caller.id))]
    pub async fn get_authority_report(
        &self,
        caller: &Caller,
        report_id: &str,
    ) -> Result<Report, CoordinationError> {
        self.load_managed_report(caller, report_id).await
    }

    /// Persist a report authored by the caller
    #[tracing::instrument(skip(self, caller, request), fields(user_id = %caller.id))]
    pub async fn create_report(
        &self,
        caller: &Caller,
        request: CreateReportRequest,
    ) -> Result<Report, CoordinationError> {
        let title = request
            .title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| CoordinationError::Validation("title is required".to_string()).log())?;
        let details = request
            .details
            .ok_or_else(|| CoordinationError::Validation("details is required".to_string()).log())?;

        let id = request
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        let authority = request
            .authority
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        // Reports may only be filed under an existing authority
        if let Some(authority_id) = &authority {
            if AuthorityStore::get_authority(authority_id).await?.is_none() {
                return Err(CoordinationError::Validation(format!(
                    "authority {authority_id} does not exist"
                ))
                .log());
            }
        }

        let report = Report::new(id, title, details, caller.id.clone(), authority);
        let created = self.repository.create(report).await?;

        tracing::info!(report_id = %created.id, authority = ?created.authority, "Report created");
        Ok(created)
    }

    /// Replace the details of a report in the caller's authority
    #[tracing::instrument(skip(self, caller, request), fields(user_id = %caller.id))]
    pub async fn update_authority_report(
        &self,
        caller: &Caller,
        report_id: &str,
        request: UpdateReportRequest,
    ) -> Result<Report, CoordinationError> {
        self.load_managed_report(caller, report_id).await?;

        let details = request
            .details
            .ok_or_else(|| CoordinationError::Validation("details is required".to_string()).log())?;

        self.repository
            .update_details(report_id, &details)
            .await?
            .ok_or_else(|| report_not_found(report_id))
    }

    /// Remove a report in the caller's authority. Missing reports are `ResourceNotFound`.
    #[tracing::instrument(skip(self, caller), fields(user_id = %caller.id))]
    pub async fn delete_authority_report(
        &self,
        caller: &Caller,
        report_id: &str,
    ) -> Result<(), CoordinationError> {
        self.load_managed_report(caller, report_id).await?;

        if !self.repository.delete_by_id(report_id).await? {
            return Err(report_not_found(report_id));
        }

        tracing::info!(report_id = %report_id, "Report deleted");
        Ok(())
    }

    pub async fn count_reports(&self) -> Result<i64, CoordinationError> {
        Ok(self.repository.count().await?)
    }

    /// The caller's authority with its member and report ids
    #[tracing::instrument(skip(self, caller), fields(user_id = %caller.id))]
    pub async fn get_own_authority(&self, caller: &Caller) -> Result<Authority, CoordinationError> {
        let authority_id = require_authority_admin(caller)?;

        AuthorityStore::get_authority(authority_id)
            .await?
            .ok_or_else(|| {
                CoordinationError::ResourceNotFound {
                    resource_type: "Authority".to_string(),
                    resource_id: authority_id.to_string(),
                }
                .log()
            })
    }
}
