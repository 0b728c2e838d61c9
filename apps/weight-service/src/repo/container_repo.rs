use chrono::Utc;
use libsql::{params, Connection};
use scalehouse_db::DbError;
use scalehouse_weight_core::Unit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
    Rejected(String),
}

/// A container's registered tare, looked up by id. `is_known` mirrors
/// whether `weight_kg` is populated; kept explicit rather than inferred
/// from the option so callers reading just the flag don't need to reason
/// about `Some(0)` (weights are validated positive, so it can't occur, but
/// the explicit flag matches the query contract in §4.2).
#[derive(Debug, Clone)]
pub struct ContainerLookup {
    pub id: String,
    pub weight_kg: Option<i64>,
    pub is_known: bool,
}

async fn existing_weight(conn: &Connection, id: &str) -> Result<Option<Option<i64>>, DbError> {
    let mut rows = conn
        .query("SELECT weight_kg FROM containers WHERE id = ?1", params![id])
        .await
        .map_err(DbError::from_libsql)?;
    match rows.next().await.map_err(DbError::from_libsql)? {
        Some(row) => Ok(Some(row.get::<Option<i64>>(0).map_err(DbError::from_libsql)?)),
        None => Ok(None),
    }
}

/// Upserts a single container's tare. Mirrors C2's `Upsert(id, weight,
/// unit, allow_update)`: rejects a duplicate unless `allow_update` is set,
/// otherwise inserts or overwrites.
pub async fn upsert(
    conn: &Connection,
    id: &str,
    weight_kg: Option<i64>,
    unit: Unit,
    allow_update: bool,
) -> Result<UpsertOutcome, DbError> {
    let unit_str = match unit {
        Unit::Kg => "kg",
        Unit::Lbs => "lbs",
    };
    let now = Utc::now().naive_utc().to_string();

    match existing_weight(conn, id).await? {
        Some(_) if !allow_update => Ok(UpsertOutcome::Rejected(format!("container '{id}' already registered"))),
        Some(_) => {
            conn.execute(
                "UPDATE containers SET weight_kg = ?1, original_unit = ?2, updated_at = ?3 WHERE id = ?4",
                params![weight_kg, unit_str, now, id],
            )
            .await
            .map_err(DbError::from_libsql)?;
            Ok(UpsertOutcome::Updated)
        }
        None => {
            conn.execute(
                "INSERT INTO containers (id, weight_kg, original_unit, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4)",
                params![id, weight_kg, unit_str, now],
            )
            .await
            .map_err(DbError::from_libsql)?;
            Ok(UpsertOutcome::Created)
        }
    }
}

/// Looks up tares for a batch of ids, returning an entry per id regardless
/// of whether it is registered (`is_known = false` for both "not
/// registered" and "registered with unknown tare").
pub async fn lookup(conn: &Connection, ids: &[String]) -> Result<Vec<ContainerLookup>, DbError> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        let weight_kg = existing_weight(conn, id).await?.flatten();
        out.push(ContainerLookup {
            id: id.clone(),
            weight_kg,
            is_known: weight_kg.is_some(),
        });
    }
    Ok(out)
}

pub async fn is_registered(conn: &Connection, id: &str) -> Result<bool, DbError> {
    Ok(existing_weight(conn, id).await?.is_some())
}
