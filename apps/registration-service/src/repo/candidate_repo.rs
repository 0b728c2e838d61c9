use chrono::Utc;
use libsql::{params, Connection, Row};
use scalehouse_db::DbError;
use uuid::Uuid;

use crate::models::CandidateDto;

const SELECT_COLUMNS: &str = "id, company_name, contact_email, phone, products, truck_count, \
     capacity_tons_per_day, location, status, created_at, updated_at, provider_id, version, rejection_reason";

fn from_row(row: Row) -> Result<CandidateDto, DbError> {
    let products_json: String = row.get(4).map_err(DbError::from_libsql)?;
    let products: Vec<String> = serde_json::from_str(&products_json)
        .map_err(|e| DbError::MappingError(format!("invalid products JSON: {e}")))?;

    Ok(CandidateDto {
        candidate_id: row.get(0).map_err(DbError::from_libsql)?,
        company_name: row.get(1).map_err(DbError::from_libsql)?,
        contact_email: row.get(2).map_err(DbError::from_libsql)?,
        phone: row.get(3).map_err(DbError::from_libsql)?,
        products,
        truck_count: row.get(5).map_err(DbError::from_libsql)?,
        capacity_tons_per_day: row.get(6).map_err(DbError::from_libsql)?,
        location: row.get(7).map_err(DbError::from_libsql)?,
        status: row.get(8).map_err(DbError::from_libsql)?,
        created_at: row.get(9).map_err(DbError::from_libsql)?,
        updated_at: row.get(10).map_err(DbError::from_libsql)?,
        provider_id: row.get(11).map_err(DbError::from_libsql)?,
        version: row.get(12).map_err(DbError::from_libsql)?,
        rejection_reason: row.get(13).map_err(DbError::from_libsql)?,
    })
}

pub struct NewCandidate<'a> {
    pub company_name: &'a str,
    pub contact_email: &'a str,
    pub phone: Option<&'a str>,
    pub products: &'a [String],
    pub truck_count: i64,
    pub capacity_tons_per_day: i64,
    pub location: Option<&'a str>,
}

pub async fn create(conn: &Connection, input: NewCandidate<'_>) -> Result<CandidateDto, DbError> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().naive_utc().to_string();
    let products_json = serde_json::to_string(input.products)
        .map_err(|e| DbError::MappingError(format!("failed to encode products: {e}")))?;

    conn.execute(
        "INSERT INTO candidates (id, company_name, contact_email, phone, products, truck_count, \
         capacity_tons_per_day, location, status, created_at, updated_at, version) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 'pending', ?9, ?9, 1)",
        params![
            id.clone(),
            input.company_name,
            input.contact_email,
            input.phone,
            products_json,
            input.truck_count,
            input.capacity_tons_per_day,
            input.location,
            now
        ],
    )
    .await
    .map_err(DbError::from_libsql)?;

    get_by_id(conn, &id).await?.ok_or(DbError::RowNotFound)
}

pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<CandidateDto>, DbError> {
    let query = format!("SELECT {SELECT_COLUMNS} FROM candidates WHERE id = ?1");
    let mut rows = conn.query(&query, params![id]).await.map_err(DbError::from_libsql)?;
    match rows.next().await.map_err(DbError::from_libsql)? {
        Some(row) => Ok(Some(from_row(row)?)),
        None => Ok(None),
    }
}

/// Lists candidates with optional status/product filters, both applied as
/// NULL-safe, strictly parameter-bound conditions (§4.10, §8 SQL-injection
/// scenario) — no filter value is ever concatenated into the query text.
/// `product` is matched via `json_each` containment against the stored
/// products array.
pub async fn list(
    conn: &Connection,
    status: Option<&str>,
    product: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<(Vec<CandidateDto>, i64), DbError> {
    let query = format!(
        "SELECT {SELECT_COLUMNS} FROM candidates \
         WHERE (?1 IS NULL OR status = ?1) \
           AND (?2 IS NULL OR EXISTS (SELECT 1 FROM json_each(products) WHERE value = ?2)) \
         ORDER BY created_at DESC LIMIT ?3 OFFSET ?4"
    );
    let mut rows = conn
        .query(&query, params![status, product, limit, offset])
        .await
        .map_err(DbError::from_libsql)?;

    let mut candidates = Vec::new();
    while let Some(row) = rows.next().await.map_err(DbError::from_libsql)? {
        candidates.push(from_row(row)?);
    }

    let count_query = "SELECT COUNT(*) FROM candidates \
         WHERE (?1 IS NULL OR status = ?1) \
           AND (?2 IS NULL OR EXISTS (SELECT 1 FROM json_each(products) WHERE value = ?2))";
    let mut count_rows = conn
        .query(count_query, params![status, product])
        .await
        .map_err(DbError::from_libsql)?;
    let total: i64 = count_rows
        .next()
        .await
        .map_err(DbError::from_libsql)?
        .ok_or(DbError::RowNotFound)?
        .get(0)
        .map_err(DbError::from_libsql)?;

    Ok((candidates, total))
}

/// Versioned transition to `approved`, conditioned on `status='pending' AND
/// version=expected_version` (§4.10). Returns `Ok(None)` if zero rows were
/// updated — the caller maps that to `ConcurrentModificationError`.
pub async fn approve(
    conn: &Connection,
    id: &str,
    provider_id: i64,
    expected_version: i64,
) -> Result<Option<CandidateDto>, DbError> {
    let now = Utc::now().naive_utc().to_string();
    let rows_updated = conn
        .execute(
            "UPDATE candidates SET status = 'approved', provider_id = ?1, version = version + 1, updated_at = ?2 \
             WHERE id = ?3 AND status = 'pending' AND version = ?4",
            params![provider_id, now, id, expected_version],
        )
        .await
        .map_err(DbError::from_libsql)?;

    if rows_updated == 0 {
        return Ok(None);
    }
    get_by_id(conn, id).await
}

/// Versioned transition to `rejected`, same compare-and-swap contract as
/// [`approve`].
pub async fn reject(
    conn: &Connection,
    id: &str,
    rejection_reason: Option<&str>,
    expected_version: i64,
) -> Result<Option<CandidateDto>, DbError> {
    let now = Utc::now().naive_utc().to_string();
    let rows_updated = conn
        .execute(
            "UPDATE candidates SET status = 'rejected', rejection_reason = ?1, version = version + 1, updated_at = ?2 \
             WHERE id = ?3 AND status = 'pending' AND version = ?4",
            params![rejection_reason, now, id, expected_version],
        )
        .await
        .map_err(DbError::from_libsql)?;

    if rows_updated == 0 {
        return Ok(None);
    }
    get_by_id(conn, id).await
}
