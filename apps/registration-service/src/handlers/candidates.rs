use axum::extract::{Path, Query, State};
use axum::Json;
use scalehouse_registration_core::{resolve_pagination, validate_candidate_input};

use crate::errors::ApiError;
use crate::models::{
    ApprovalResponse, CandidateCreateRequest, CandidateDto, CandidateListResponse, ListCandidatesParams,
    PaginationDto, RejectionRequest, RejectionResponse,
};
use crate::repo::candidate_repo::{self, NewCandidate};
use crate::service::approval;
use crate::state::AppState;

const MAX_COMPANY_NAME_LEN: usize = 255;

pub async fn create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CandidateCreateRequest>,
) -> Result<(axum::http::StatusCode, Json<CandidateDto>), ApiError> {
    let name = req.company_name.trim();
    if name.is_empty() || name.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err(ApiError::InvalidInput(format!("company_name must be 1-{MAX_COMPANY_NAME_LEN} characters")));
    }
    validate_candidate_input(&req.products, req.truck_count, req.capacity_tons_per_day)
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;

    let conn = state.db.get_connection()?;
    let candidate = candidate_repo::create(
        &conn,
        NewCandidate {
            company_name: name,
            contact_email: req.contact_email.trim(),
            phone: req.phone.as_deref(),
            products: &req.products,
            truck_count: req.truck_count,
            capacity_tons_per_day: req.capacity_tons_per_day,
            location: req.location.as_deref(),
        },
    )
    .await?;

    Ok((axum::http::StatusCode::CREATED, Json(candidate)))
}

pub async fn list_candidates(
    State(state): State<AppState>,
    Query(params): Query<ListCandidatesParams>,
) -> Result<Json<CandidateListResponse>, ApiError> {
    let pagination = resolve_pagination(params.page, params.page_size, params.limit, params.offset);
    let conn = state.db.get_connection()?;

    let (candidates, total) = candidate_repo::list(
        &conn,
        params.status.as_deref(),
        params.product.as_deref(),
        pagination.limit,
        pagination.offset,
    )
    .await?;

    Ok(Json(CandidateListResponse {
        candidates,
        pagination: PaginationDto { total, limit: pagination.limit, offset: pagination.offset },
    }))
}

pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CandidateDto>, ApiError> {
    let conn = state.db.get_connection()?;
    candidate_repo::get_by_id(&conn, &id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("candidate {id} not found")))
}

pub async fn approve_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApprovalResponse>, ApiError> {
    let conn = state.db.get_connection()?;
    let response = approval::approve(&conn, &state.billing_client, &id).await?;
    Ok(Json(response))
}

pub async fn reject_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RejectionRequest>,
) -> Result<Json<RejectionResponse>, ApiError> {
    let conn = state.db.get_connection()?;
    let response = approval::reject(&conn, &id, req.reason.as_deref()).await?;
    Ok(Json(response))
}
