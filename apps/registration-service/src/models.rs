use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateCreateRequest {
    pub company_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub products: Vec<String>,
    pub truck_count: i64,
    pub capacity_tons_per_day: i64,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDto {
    pub candidate_id: String,
    pub status: String,
    pub company_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub products: Vec<String>,
    pub truck_count: i64,
    pub capacity_tons_per_day: i64,
    pub location: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    pub provider_id: Option<i64>,
    pub version: i64,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListCandidatesParams {
    pub status: Option<String>,
    pub product: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationDto {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateDto>,
    pub pagination: PaginationDto,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApprovalResponse {
    pub candidate_id: String,
    pub status: String,
    pub provider_id: i64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RejectionRequest {
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectionResponse {
    pub candidate_id: String,
    pub status: String,
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
}
