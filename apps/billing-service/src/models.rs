use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ProviderDto {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateProviderRequest {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TruckDto {
    pub id: String,
    pub provider_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertTruckRequest {
    pub id: String,
    pub provider_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTruckRequest {
    pub provider_id: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateRow {
    #[serde(rename = "Product", alias = "product")]
    pub product: String,
    #[serde(rename = "Rate", alias = "rate")]
    pub rate: i64,
    #[serde(rename = "Scope", alias = "scope")]
    pub scope: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BillResponse {
    pub id: i64,
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "truckCount")]
    pub truck_count: usize,
    #[serde(rename = "sessionCount")]
    pub session_count: usize,
    pub products: Vec<scalehouse_billing_core::ProductLine>,
    pub total: i64,
}
