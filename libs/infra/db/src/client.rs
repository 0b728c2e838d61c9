use std::sync::Arc;

use libsql::{Builder, Connection, Database};
use tracing::{debug, info, instrument};

use crate::errors::DbError;

/// A connected libSQL/Turso database, holding enough state to hand out a
/// fresh `Connection` per request.
///
/// `:memory:` databases need an anchor connection kept alive for the
/// lifetime of the client, otherwise libsql tears the database down the
/// moment the first connection is dropped.
pub struct TursoClient {
    database: Arc<Database>,
    _memory_anchor: Option<Arc<Connection>>,
}

impl TursoClient {
    /// Connects to `database_url`, applying `schema_statements` (expected to
    /// be idempotent `CREATE TABLE IF NOT EXISTS` / `CREATE INDEX IF NOT
    /// EXISTS` statements) immediately after connecting.
    #[instrument(skip(schema_statements, access_token))]
    pub async fn connect(
        database_url: &str,
        access_token: Option<String>,
        schema_statements: &[&str],
    ) -> Result<Self, DbError> {
        let is_remote = database_url.starts_with("libsql://") || database_url.starts_with("https://");
        let is_memory = database_url == ":memory:" || database_url.contains("mode=memory");

        let database = if is_remote {
            let token = access_token.ok_or_else(|| {
                DbError::ConfigurationError("remote database URL requires an access token".into())
            })?;
            Builder::new_remote(database_url.to_string(), token)
                .build()
                .await
                .map_err(|e| DbError::ConnectionError(e.to_string()))?
        } else {
            Builder::new_local(database_url)
                .build()
                .await
                .map_err(|e| DbError::ConnectionError(e.to_string()))?
        };

        let database = Arc::new(database);

        let anchor = if is_memory {
            let conn = database
                .connect()
                .map_err(|e| DbError::ConnectionError(e.to_string()))?;
            Some(Arc::new(conn))
        } else {
            None
        };

        let client = Self {
            database,
            _memory_anchor: anchor,
        };

        client.apply_schema(schema_statements).await?;

        Ok(client)
    }

    async fn apply_schema(&self, statements: &[&str]) -> Result<(), DbError> {
        info!("applying schema ({} statements)", statements.len());
        let conn = self.get_connection()?;
        for statement in statements {
            debug!(statement, "running schema statement");
            conn.execute(statement, ())
                .await
                .map_err(DbError::from_libsql)?;
        }
        Ok(())
    }

    /// Hands out a fresh connection. One connection is acquired per request
    /// and dropped at the end of the handler's scope; no pooling primitive
    /// is needed beyond what `libsql::Database` already provides.
    pub fn get_connection(&self) -> Result<Connection, DbError> {
        self.database
            .connect()
            .map_err(|e| DbError::ConnectionError(e.to_string()))
    }
}
