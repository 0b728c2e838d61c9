use chrono::Utc;
use libsql::{params, Connection};
use scalehouse_db::DbError;

use crate::models::ProviderDto;

pub async fn create(conn: &Connection, name: &str) -> Result<ProviderDto, DbError> {
    let now = Utc::now().naive_utc().to_string();
    conn.execute(
        "INSERT INTO providers (name, created_at, updated_at) VALUES (?1, ?2, ?2)",
        params![name, now],
    )
    .await
    .map_err(DbError::from_libsql)?;

    let id = conn.last_insert_rowid();
    Ok(ProviderDto { id, name: name.to_string() })
}

pub async fn rename(conn: &Connection, id: i64, name: &str) -> Result<Option<ProviderDto>, DbError> {
    if get_by_id(conn, id).await?.is_none() {
        return Ok(None);
    }
    let now = Utc::now().naive_utc().to_string();
    conn.execute(
        "UPDATE providers SET name = ?1, updated_at = ?2 WHERE id = ?3",
        params![name, now, id],
    )
    .await
    .map_err(DbError::from_libsql)?;

    Ok(Some(ProviderDto { id, name: name.to_string() }))
}

pub async fn get_by_id(conn: &Connection, id: i64) -> Result<Option<ProviderDto>, DbError> {
    let mut rows = conn
        .query("SELECT id, name FROM providers WHERE id = ?1", params![id])
        .await
        .map_err(DbError::from_libsql)?;
    match rows.next().await.map_err(DbError::from_libsql)? {
        Some(row) => Ok(Some(ProviderDto {
            id: row.get(0).map_err(DbError::from_libsql)?,
            name: row.get(1).map_err(DbError::from_libsql)?,
        })),
        None => Ok(None),
    }
}
