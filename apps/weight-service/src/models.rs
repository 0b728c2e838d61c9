use chrono::NaiveDateTime;
use scalehouse_weight_core::{Direction, NaInt, Unit};
use serde::{Deserialize, Serialize};

/// `containers` may arrive as a comma-separated string or a JSON array;
/// both are accepted per §6.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ContainersInput {
    Text(String),
    List(Vec<String>),
}

impl ContainersInput {
    pub fn into_raw_list(self) -> Vec<String> {
        match self {
            ContainersInput::Text(s) => scalehouse_weight_core::parse_container_list(&s),
            ContainersInput::List(list) => list
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeighRequest {
    pub direction: String,
    pub truck: Option<String>,
    pub containers: ContainersInput,
    pub weight: i64,
    pub unit: Unit,
    pub produce: Option<String>,
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeighResponse {
    pub id: i64,
    pub session_id: String,
    pub direction: Direction,
    pub truck: Option<String>,
    pub bruto: i64,
    pub truck_tara: Option<i64>,
    pub neto: NaInt,
}

/// A stored transaction row, as persisted and as returned by the query
/// endpoints. `truck_tara`/`neto` are `None` both while a session is still
/// open and when the session resolved to the `"na"` sentinel — the two are
/// indistinguishable at the HTTP edge, matching §4.4's literal response
/// shape for a freshly-opened IN.
#[derive(Debug, Clone)]
pub struct TransactionRow {
    pub id: i64,
    pub session_id: String,
    pub created_at: NaiveDateTime,
    pub direction: Direction,
    pub truck: Option<String>,
    pub containers: Vec<String>,
    pub bruto: i64,
    pub truck_tara: Option<i64>,
    pub neto: Option<i64>,
    pub produce: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionDto {
    pub id: i64,
    pub session_id: String,
    pub datetime: String,
    pub direction: Direction,
    pub truck: Option<String>,
    pub containers: Vec<String>,
    pub bruto: i64,
    pub truck_tara: Option<i64>,
    pub neto: NaInt,
    pub produce: Option<String>,
}

impl From<TransactionRow> for TransactionDto {
    fn from(row: TransactionRow) -> Self {
        TransactionDto {
            id: row.id,
            session_id: row.session_id,
            datetime: scalehouse_weight_core::format_timestamp(row.created_at),
            direction: row.direction,
            truck: row.truck,
            containers: row.containers,
            bruto: row.bruto,
            truck_tara: row.truck_tara,
            neto: NaInt(row.neto),
            produce: row.produce,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionDetailDto {
    pub session_id: String,
    pub is_complete: bool,
    #[serde(rename = "in")]
    pub inbound: Option<TransactionDto>,
    pub out: Option<TransactionDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterContainerRequest {
    pub id: String,
    pub weight: Option<i64>,
    #[serde(default)]
    pub unit: Option<Unit>,
    #[serde(default)]
    pub allow_update: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterContainerResponse {
    pub id: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchUpsertResult {
    pub processed: usize,
    pub updated: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}
