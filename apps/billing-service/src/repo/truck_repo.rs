use chrono::Utc;
use libsql::{params, Connection};
use scalehouse_db::DbError;

use crate::models::TruckDto;

/// Upserts a truck by id (reassignment to a new provider is allowed).
/// Returns `Ok(None)` when `provider_id` doesn't reference an existing
/// provider, so the caller can surface a 404.
pub async fn upsert(conn: &Connection, id: &str, provider_id: i64) -> Result<Option<TruckDto>, DbError> {
    if super::provider_repo::get_by_id(conn, provider_id).await?.is_none() {
        return Ok(None);
    }

    let now = Utc::now().naive_utc().to_string();
    let exists = get_by_id(conn, id).await?.is_some();

    if exists {
        conn.execute(
            "UPDATE trucks SET provider_id = ?1, updated_at = ?2 WHERE id = ?3",
            params![provider_id, now, id],
        )
        .await
        .map_err(DbError::from_libsql)?;
    } else {
        conn.execute(
            "INSERT INTO trucks (id, provider_id, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
            params![id, provider_id, now],
        )
        .await
        .map_err(DbError::from_libsql)?;
    }

    Ok(Some(TruckDto { id: id.to_string(), provider_id }))
}

pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<TruckDto>, DbError> {
    let mut rows = conn
        .query("SELECT id, provider_id FROM trucks WHERE id = ?1", params![id])
        .await
        .map_err(DbError::from_libsql)?;
    match rows.next().await.map_err(DbError::from_libsql)? {
        Some(row) => Ok(Some(TruckDto {
            id: row.get(0).map_err(DbError::from_libsql)?,
            provider_id: row.get(1).map_err(DbError::from_libsql)?,
        })),
        None => Ok(None),
    }
}

pub async fn list_by_provider(conn: &Connection, provider_id: i64) -> Result<Vec<String>, DbError> {
    let mut rows = conn
        .query("SELECT id FROM trucks WHERE provider_id = ?1", params![provider_id])
        .await
        .map_err(DbError::from_libsql)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await.map_err(DbError::from_libsql)? {
        out.push(row.get(0).map_err(DbError::from_libsql)?);
    }
    Ok(out)
}
