use std::collections::BTreeSet;

use libsql::Connection;
use scalehouse_weight_core::{classify_item, Direction, ItemKind, NaInt, TimeWindow};

use crate::errors::ApiError;
use crate::models::TransactionRow;
use crate::repo::{container_repo, transaction_repo};

pub async fn list_range(
    conn: &Connection,
    window: TimeWindow,
    directions: &[Direction],
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<TransactionRow>, ApiError> {
    Ok(transaction_repo::query_range(conn, window.from, window.to, directions, limit, offset).await?)
}

fn dedupe_session_ids(rows: &[&TransactionRow]) -> Vec<String> {
    let set: BTreeSet<&str> = rows.iter().map(|r| r.session_id.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}

pub struct TruckRollup {
    pub session_ids: Vec<String>,
    pub truck_tara_avg: NaInt,
}

/// §4.5 truck rollup: session ids the license participated in during the
/// window, and the mean of non-null `truck_tara` over those transactions.
pub async fn rollup_truck(conn: &Connection, truck: &str, window: TimeWindow) -> Result<TruckRollup, ApiError> {
    let all = transaction_repo::query_range(conn, window.from, window.to, &[], None, None).await?;
    let rows: Vec<&TransactionRow> = all.iter().filter(|r| r.truck.as_deref() == Some(truck)).collect();

    let taras: Vec<i64> = rows.iter().filter_map(|r| r.truck_tara).collect();
    let avg = if taras.is_empty() {
        None
    } else {
        Some(taras.iter().sum::<i64>() / taras.len() as i64)
    };

    Ok(TruckRollup { session_ids: dedupe_session_ids(&rows), truck_tara_avg: NaInt(avg) })
}

pub struct ContainerRollup {
    pub tare_kg: NaInt,
    pub session_ids: Vec<String>,
}

/// §4.5 container rollup: registered tare (or `"na"`) and session ids
/// touching the container in the window.
pub async fn rollup_container(conn: &Connection, container: &str, window: TimeWindow) -> Result<ContainerRollup, ApiError> {
    let all = transaction_repo::query_range(conn, window.from, window.to, &[], None, None).await?;
    let rows: Vec<&TransactionRow> = all
        .iter()
        .filter(|r| r.containers.iter().any(|c| c == container))
        .collect();

    let tare = container_repo::lookup(conn, std::slice::from_ref(&container.to_string()))
        .await?
        .into_iter()
        .next()
        .and_then(|c| c.weight_kg);

    Ok(ContainerRollup { tare_kg: NaInt(tare), session_ids: dedupe_session_ids(&rows) })
}

/// Truck-vs-container disambiguation (§4.5, §9): a registered container id
/// always wins; otherwise classify by which role has usage in the window,
/// preferring container on ties.
pub async fn classify(conn: &Connection, id: &str, window: TimeWindow) -> Result<ItemKind, ApiError> {
    let is_registered_container = container_repo::is_registered(conn, id).await?;
    let all = transaction_repo::query_range(conn, window.from, window.to, &[], None, None).await?;
    let has_truck_usage = all.iter().any(|r| r.truck.as_deref() == Some(id));
    let has_container_usage = all.iter().any(|r| r.containers.iter().any(|c| c == id));

    Ok(classify_item(is_registered_container, has_truck_usage, has_container_usage))
}

/// C2's `UnknownContainers`: ids used in at least one transaction in the
/// window with no registered tare.
pub async fn unknown_containers(conn: &Connection, window: TimeWindow) -> Result<Vec<String>, ApiError> {
    let all = transaction_repo::query_range(conn, window.from, window.to, &[], None, None).await?;
    let used: BTreeSet<&str> = all.iter().flat_map(|r| r.containers.iter().map(String::as_str)).collect();

    let mut unknown = Vec::new();
    for id in used {
        if !container_repo::is_registered(conn, id).await? {
            unknown.push(id.to_string());
        }
    }
    Ok(unknown)
}
