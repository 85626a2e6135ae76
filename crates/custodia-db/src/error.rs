//! Database-specific error types and conversions.

use custodia_core::error::CustodiaError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Malformed record: {0}")]
    Corrupt(String),
}

impl From<DbError> for CustodiaError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => CustodiaError::NotFound { entity, id },
            other => CustodiaError::Database(other.to_string()),
        }
    }
}
