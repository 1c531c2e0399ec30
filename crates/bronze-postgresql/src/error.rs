//! Error types for the PostgreSQL sink.

use thiserror::Error;

/// Errors that can occur connecting to or reading from PostgreSQL.
#[derive(Error, Debug)]
pub enum PostgreSQLSinkError {
    /// PostgreSQL connection or query error.
    #[error("PostgreSQL error: {0}")]
    PostgreSQL(#[from] tokio_postgres::Error),

    /// Invalid table name or unknown label read back from the table.
    #[error("Domain error: {0}")]
    Domain(#[from] ed_core::DomainError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
