use libsql::{params, Connection, Transaction};
use scalehouse_billing_core::Rate;
use scalehouse_db::DbError;

/// Replaces the entire rate table atomically: `DELETE *; INSERT new` inside
/// one database transaction (§4.6, §5, §9). If the connection's
/// transaction API is unavailable for some reason the caller should not
/// call this without it — partial replacement would violate the "readers
/// see either the whole old table or the whole new one" guarantee.
pub async fn replace_all(conn: &Connection, rates: &[Rate]) -> Result<(), DbError> {
    let tx: Transaction = conn.transaction().await.map_err(DbError::from_libsql)?;

    tx.execute("DELETE FROM rates", ()).await.map_err(DbError::from_libsql)?;
    for rate in rates {
        tx.execute(
            "INSERT INTO rates (product_id, rate, scope) VALUES (?1, ?2, ?3)",
            params![rate.product_id.clone(), rate.rate, rate.scope.clone()],
        )
        .await
        .map_err(DbError::from_libsql)?;
    }

    tx.commit().await.map_err(DbError::from_libsql)?;
    Ok(())
}

pub async fn list_all(conn: &Connection) -> Result<Vec<Rate>, DbError> {
    let mut rows = conn
        .query("SELECT product_id, rate, scope FROM rates", ())
        .await
        .map_err(DbError::from_libsql)?;
    let mut out = Vec::new();
    while let Some(row) = rows.next().await.map_err(DbError::from_libsql)? {
        out.push(Rate {
            product_id: row.get(0).map_err(DbError::from_libsql)?,
            rate: row.get(1).map_err(DbError::from_libsql)?,
            scope: row.get(2).map_err(DbError::from_libsql)?,
        });
    }
    Ok(out)
}
