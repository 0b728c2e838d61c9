use chrono::{NaiveDateTime, Utc};
use libsql::{params, Connection, Row};
use scalehouse_db::DbError;
use scalehouse_weight_core::Direction;

use crate::models::TransactionRow;

pub struct NewTransaction {
    pub session_id: String,
    pub direction: Direction,
    pub truck: Option<String>,
    pub containers: Vec<String>,
    pub bruto: i64,
    pub truck_tara: Option<i64>,
    pub neto: Option<i64>,
    pub produce: Option<String>,
}

fn from_row(row: Row) -> Result<TransactionRow, DbError> {
    let containers_json: String = row.get(4).map_err(DbError::from_libsql)?;
    let containers: Vec<String> = serde_json::from_str(&containers_json)
        .map_err(|e| DbError::MappingError(format!("corrupt containers column: {e}")))?;
    let direction_str: String = row.get(3).map_err(DbError::from_libsql)?;
    let direction = Direction::parse(&direction_str)
        .ok_or_else(|| DbError::MappingError(format!("unknown direction '{direction_str}'")))?;
    let created_at_str: String = row.get(2).map_err(DbError::from_libsql)?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S"))
        .map_err(|e| DbError::MappingError(format!("corrupt created_at column: {e}")))?;

    Ok(TransactionRow {
        id: row.get(0).map_err(DbError::from_libsql)?,
        session_id: row.get(1).map_err(DbError::from_libsql)?,
        created_at,
        direction,
        truck: row.get(5).map_err(DbError::from_libsql)?,
        containers,
        bruto: row.get(6).map_err(DbError::from_libsql)?,
        truck_tara: row.get(7).map_err(DbError::from_libsql)?,
        neto: row.get(8).map_err(DbError::from_libsql)?,
        produce: row.get(9).map_err(DbError::from_libsql)?,
    })
}

const SELECT_COLUMNS: &str =
    "id, session_id, created_at, direction, containers, truck, bruto, truck_tara, neto, produce";

/// Inserts a transaction row, returning its auto-assigned id.
pub async fn insert(conn: &Connection, tx: NewTransaction) -> Result<i64, DbError> {
    let containers_json = serde_json::to_string(&tx.containers)
        .map_err(|e| DbError::MappingError(format!("failed to encode containers: {e}")))?;
    let now = Utc::now().naive_utc().to_string();

    conn.execute(
        "INSERT INTO transactions (session_id, created_at, direction, truck, containers, bruto, truck_tara, neto, produce)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            tx.session_id,
            now,
            tx.direction.as_str(),
            tx.truck,
            containers_json,
            tx.bruto,
            tx.truck_tara,
            tx.neto,
            tx.produce
        ],
    )
    .await
    .map_err(DbError::from_libsql)?;

    Ok(conn.last_insert_rowid())
}

pub async fn get_by_id(conn: &Connection, id: i64) -> Result<Option<TransactionRow>, DbError> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM transactions WHERE id = ?1");
    let mut rows = conn.query(&sql, params![id]).await.map_err(DbError::from_libsql)?;
    match rows.next().await.map_err(DbError::from_libsql)? {
        Some(row) => Ok(Some(from_row(row)?)),
        None => Ok(None),
    }
}

pub async fn get_by_session(conn: &Connection, session_id: &str) -> Result<Vec<TransactionRow>, DbError> {
    let sql = format!("SELECT {SELECT_COLUMNS} FROM transactions WHERE session_id = ?1 ORDER BY id");
    let mut rows = conn.query(&sql, params![session_id]).await.map_err(DbError::from_libsql)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await.map_err(DbError::from_libsql)? {
        out.push(from_row(row)?);
    }
    Ok(out)
}

/// Finds the most recent open IN (no OUT yet on its session) whose truck
/// and container multiset equal the ones supplied. SQLite can't compare
/// multisets directly, so candidate rows are fetched by truck and the
/// multiset comparison is done in Rust.
pub async fn find_matching_in(
    conn: &Connection,
    truck: Option<&str>,
    containers: &[String],
) -> Result<Option<TransactionRow>, DbError> {
    let sql = format!(
        "SELECT {SELECT_COLUMNS} FROM transactions
         WHERE direction = 'in'
           AND (truck = ?1 OR (?1 IS NULL AND truck IS NULL))
           AND session_id NOT IN (SELECT session_id FROM transactions WHERE direction = 'out')
         ORDER BY id DESC"
    );
    let mut rows = conn.query(&sql, params![truck]).await.map_err(DbError::from_libsql)?;

    let mut wanted: Vec<&str> = containers.iter().map(String::as_str).collect();
    wanted.sort_unstable();

    while let Some(row) = rows.next().await.map_err(DbError::from_libsql)? {
        let candidate = from_row(row)?;
        let mut have: Vec<&str> = candidate.containers.iter().map(String::as_str).collect();
        have.sort_unstable();
        if have == wanted {
            return Ok(Some(candidate));
        }
    }
    Ok(None)
}

/// Back-fills the matching IN row on `session_id` with the OUT's computed
/// `truck_tara`/`neto`, so either row alone answers rollup queries.
pub async fn backfill_in(
    conn: &Connection,
    session_id: &str,
    truck_tara: Option<i64>,
    neto: Option<i64>,
) -> Result<(), DbError> {
    conn.execute(
        "UPDATE transactions SET truck_tara = ?1, neto = ?2 WHERE session_id = ?3 AND direction = 'in'",
        params![truck_tara, neto, session_id],
    )
    .await
    .map_err(DbError::from_libsql)?;
    Ok(())
}

/// Loads every transaction in `[from, to]`, optionally restricted to a set
/// of directions. Downstream rollups (by truck, by container) filter this
/// in-memory rather than via fragile `LIKE` matching against the
/// serialized container list.
pub async fn query_range(
    conn: &Connection,
    from: NaiveDateTime,
    to: NaiveDateTime,
    directions: &[Direction],
    limit: Option<i64>,
    offset: Option<i64>,
) -> Result<Vec<TransactionRow>, DbError> {
    let from_s = from.to_string();
    let to_s = to.to_string();

    let mut sql = format!("SELECT {SELECT_COLUMNS} FROM transactions WHERE created_at >= ?1 AND created_at <= ?2");
    if !directions.is_empty() {
        let list = directions
            .iter()
            .map(|d| format!("'{}'", d.as_str()))
            .collect::<Vec<_>>()
            .join(",");
        sql.push_str(&format!(" AND direction IN ({list})"));
    }
    sql.push_str(" ORDER BY id");
    if let Some(limit) = limit {
        sql.push_str(&format!(" LIMIT {limit}"));
        if let Some(offset) = offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }
    }

    let mut rows = conn.query(&sql, params![from_s, to_s]).await.map_err(DbError::from_libsql)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await.map_err(DbError::from_libsql)? {
        out.push(from_row(row)?);
    }
    Ok(out)
}
