use libsql::Connection;
use scalehouse_registration_core::{validate_rejection_reason, CandidateStatus};

use crate::client::billing_client::BillingClient;
use crate::errors::ApiError;
use crate::models::{ApprovalResponse, RejectionResponse};
use crate::repo::candidate_repo;

/// Runs the §4.11 approval workflow: provision a Billing provider, then
/// apply the version-guarded UPDATE. If the provider is created but the
/// UPDATE loses the optimistic-lock race, the provider row is orphaned in
/// the Billing store — documented as a compensation gap, not retried
/// automatically (§4.11, §9).
pub async fn approve(conn: &Connection, billing_client: &BillingClient, id: &str) -> Result<ApprovalResponse, ApiError> {
    let candidate = candidate_repo::get_by_id(conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("candidate {id} not found")))?;

    if candidate.status != CandidateStatus::Pending.as_str() {
        return Err(ApiError::Validation(format!("candidate already {}", candidate.status)));
    }

    let provider_id = billing_client
        .create_provider(&candidate.company_name)
        .await
        .map_err(|e| ApiError::UpstreamUnavailable(e.to_string()))?;

    match candidate_repo::approve(conn, id, provider_id, candidate.version).await? {
        Some(updated) => Ok(ApprovalResponse {
            candidate_id: updated.candidate_id,
            status: updated.status,
            provider_id: updated.provider_id.unwrap_or(provider_id),
        }),
        None => {
            tracing::error!(
                candidate_id = id,
                provider_id,
                "billing provider created but candidate approval lost the optimistic-lock race; \
                 provider is orphaned pending manual reconciliation"
            );
            Err(ApiError::ConcurrentModification(
                "candidate was modified by another process. Please retry.".to_string(),
            ))
        }
    }
}

pub async fn reject(conn: &Connection, id: &str, reason: Option<&str>) -> Result<RejectionResponse, ApiError> {
    validate_rejection_reason(reason).map_err(|e| ApiError::Validation(e.to_string()))?;

    let candidate = candidate_repo::get_by_id(conn, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("candidate {id} not found")))?;

    if candidate.status != CandidateStatus::Pending.as_str() {
        return Err(ApiError::Validation(format!("candidate already {}", candidate.status)));
    }

    match candidate_repo::reject(conn, id, reason, candidate.version).await? {
        Some(updated) => Ok(RejectionResponse {
            candidate_id: updated.candidate_id,
            status: updated.status,
            rejection_reason: updated.rejection_reason,
        }),
        None => Err(ApiError::ConcurrentModification(
            "candidate was modified by another process. Please retry.".to_string(),
        )),
    }
}
