//! PostgreSQL bronze sink.
//!
//! Connects to PostgreSQL with tokio-postgres and implements
//! [`bronze_sink::BronzeSink`] over an existing bronze table: explicit
//! `BEGIN`/`COMMIT`/`ROLLBACK`, `TRUNCATE`, and a prepared seven-parameter
//! `INSERT`.
//!
//! # Example
//!
//! ```ignore
//! use bronze_postgresql::{PostgreSQLSink, PostgreSQLSinkArgs};
//!
//! let mut sink = PostgreSQLSink::connect(&args).await?;
//! sink.begin().await?;
//! ```

pub mod args;
mod error;
mod sink;
pub mod sql;

pub use args::{AuthMode, PostgreSQLSinkArgs};
pub use error::PostgreSQLSinkError;
pub use sink::PostgreSQLSink;
