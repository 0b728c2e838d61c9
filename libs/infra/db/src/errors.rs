use thiserror::Error;

/// Errors surfaced by the connection layer. Services layer their own
/// domain-specific error kinds on top of this rather than matching on it
/// directly in handlers.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("failed to connect to database: {0}")]
    ConnectionError(String),

    #[error("invalid database configuration: {0}")]
    ConfigurationError(String),

    #[error("query failed: {0}")]
    QueryError(#[from] libsql::Error),

    #[error("failed to map row into domain type: {0}")]
    MappingError(String),

    #[error("expected row not found")]
    RowNotFound,

    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl DbError {
    /// Best-effort classification of a raw libsql error as a unique
    /// constraint violation, since libsql doesn't expose SQLite error
    /// codes directly through its public API.
    pub fn from_libsql(err: libsql::Error) -> Self {
        let message = err.to_string();
        if message.contains("UNIQUE constraint failed") {
            DbError::UniqueViolation(message)
        } else {
            DbError::QueryError(err)
        }
    }
}
