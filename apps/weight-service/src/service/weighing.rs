use libsql::Connection;
use scalehouse_weight_core::{
    calculate_net_weight, calculate_truck_tara, can_compute_out_weights, normalize_to_kg, validate_container_ids,
    validate_weight_kg, Direction, NaInt,
};
use uuid::Uuid;

use crate::errors::ApiError;
use crate::models::{TransactionRow, WeighRequest, WeighResponse};
use crate::repo::{container_repo, transaction_repo};
use crate::repo::transaction_repo::NewTransaction;

const NA_SENTINEL: &str = "na";

fn normalize_optional_sentinel(value: Option<String>) -> Option<String> {
    match value {
        Some(v) if v.trim().eq_ignore_ascii_case(NA_SENTINEL) => None,
        Some(v) => Some(v.trim().to_string()),
        None => None,
    }
}

/// Runs the IN/OUT/NONE state machine described in §4.4 against a single
/// weighing request, persisting the resulting transaction(s).
pub async fn process_weigh(conn: &Connection, req: WeighRequest) -> Result<WeighResponse, ApiError> {
    let direction = Direction::parse(&req.direction)
        .ok_or_else(|| ApiError::Validation(format!("unknown direction '{}'", req.direction)))?;

    let truck = normalize_optional_sentinel(req.truck);
    let produce = normalize_optional_sentinel(req.produce);
    let containers = req.containers.into_raw_list();
    validate_container_ids(&containers)?;

    let bruto = normalize_to_kg(req.weight, req.unit);
    validate_weight_kg(bruto)?;

    match direction {
        Direction::In => process_in(conn, truck, containers, bruto, produce, req.force).await,
        Direction::Out => process_out(conn, truck, containers, bruto, produce, req.force).await,
        Direction::None => process_none(conn, truck, containers, bruto, produce).await,
    }
}

async fn process_in(
    conn: &Connection,
    truck: Option<String>,
    containers: Vec<String>,
    bruto: i64,
    produce: Option<String>,
    force: bool,
) -> Result<WeighResponse, ApiError> {
    if !force {
        if transaction_repo::find_matching_in(conn, truck.as_deref(), &containers)
            .await?
            .is_some()
        {
            return Err(ApiError::SequenceViolation(
                "an open session already exists for this truck/container combination".to_string(),
            ));
        }
    }

    let session_id = Uuid::new_v4().to_string();
    let id = transaction_repo::insert(
        conn,
        NewTransaction {
            session_id: session_id.clone(),
            direction: Direction::In,
            truck: truck.clone(),
            containers,
            bruto,
            truck_tara: None,
            neto: None,
            produce,
        },
    )
    .await?;

    Ok(WeighResponse {
        id,
        session_id,
        direction: Direction::In,
        truck,
        bruto,
        truck_tara: None,
        neto: NaInt::na(),
    })
}

async fn process_out(
    conn: &Connection,
    truck: Option<String>,
    containers: Vec<String>,
    bruto: i64,
    produce: Option<String>,
    force: bool,
) -> Result<WeighResponse, ApiError> {
    let matching_in = transaction_repo::find_matching_in(conn, truck.as_deref(), &containers).await?;

    let Some(in_row) = matching_in else {
        if !force {
            return Err(ApiError::SequenceViolation(
                "no matching open session found for this truck/container combination".to_string(),
            ));
        }
        return insert_standalone_out(conn, truck, containers, bruto, produce).await;
    };

    let lookups = container_repo::lookup(conn, &containers).await?;
    let unknown: Vec<String> = lookups.iter().filter(|c| !c.is_known).map(|c| c.id.clone()).collect();

    if !unknown.is_empty() && !force {
        can_compute_out_weights(&unknown).map_err(|e| ApiError::ContainerUnknown(e.to_string()))?;
    }

    let (truck_tara, neto) = if unknown.is_empty() {
        let tare_total: i64 = lookups.iter().filter_map(|c| c.weight_kg).sum();
        (
            Some(calculate_truck_tara(bruto, tare_total)),
            Some(calculate_net_weight(in_row.bruto, bruto)),
        )
    } else {
        (None, None)
    };

    let id = transaction_repo::insert(
        conn,
        NewTransaction {
            session_id: in_row.session_id.clone(),
            direction: Direction::Out,
            truck: truck.clone(),
            containers,
            bruto,
            truck_tara,
            neto,
            produce,
        },
    )
    .await?;

    transaction_repo::backfill_in(conn, &in_row.session_id, truck_tara, neto).await?;

    Ok(WeighResponse {
        id,
        session_id: in_row.session_id,
        direction: Direction::Out,
        truck,
        bruto,
        truck_tara,
        neto: NaInt(neto),
    })
}

async fn insert_standalone_out(
    conn: &Connection,
    truck: Option<String>,
    containers: Vec<String>,
    bruto: i64,
    produce: Option<String>,
) -> Result<WeighResponse, ApiError> {
    let session_id = Uuid::new_v4().to_string();
    let id = transaction_repo::insert(
        conn,
        NewTransaction {
            session_id: session_id.clone(),
            direction: Direction::Out,
            truck: truck.clone(),
            containers,
            bruto,
            truck_tara: None,
            neto: None,
            produce,
        },
    )
    .await?;

    Ok(WeighResponse {
        id,
        session_id,
        direction: Direction::Out,
        truck,
        bruto,
        truck_tara: None,
        neto: NaInt::na(),
    })
}

async fn process_none(
    conn: &Connection,
    truck: Option<String>,
    containers: Vec<String>,
    bruto: i64,
    produce: Option<String>,
) -> Result<WeighResponse, ApiError> {
    let session_id = Uuid::new_v4().to_string();
    let id = transaction_repo::insert(
        conn,
        NewTransaction {
            session_id: session_id.clone(),
            direction: Direction::None,
            truck: truck.clone(),
            containers,
            bruto,
            truck_tara: None,
            neto: None,
            produce,
        },
    )
    .await?;

    Ok(WeighResponse {
        id,
        session_id,
        direction: Direction::None,
        truck,
        bruto,
        truck_tara: None,
        neto: NaInt::na(),
    })
}

/// Builds a [`crate::models::SessionDetailDto`]-shaped pair from the rows
/// on one session, for the `GET /session/{uuid}` handler.
pub fn is_complete(rows: &[TransactionRow]) -> bool {
    rows.iter().any(|r| r.direction == Direction::In) && rows.iter().any(|r| r.direction == Direction::Out)
}
