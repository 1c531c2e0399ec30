//! Core types for the ed-bronze pipeline.
//!
//! This crate provides the record model shared by the generator and the
//! loader:
//!
//! - [`EdVisit`] - one emergency-department visit
//! - [`AcuityLevel`], [`AgeGroup`], [`ChiefComplaint`] - the enumerated domains
//! - [`BRONZE_COLUMNS`] - column order of the CSV file and the bronze table
//!
//! # Architecture
//!
//! ```text
//! ed-core (this crate)
//!    │
//!    ├─── ed-generator       (samples EdVisit records)
//!    ├─── ed-populate-csv    (EdVisit → CSV row)
//!    ├─── ed-csv-source      (CSV row → EdVisit)
//!    └─── bronze-sink        (writes EdVisit into the bronze table)
//! ```

pub mod schema;
pub mod visit;

pub use schema::{
    column_names, create_table_ddl, quote_table_name, BronzeColumn, BRONZE_COLUMNS,
    DEFAULT_BRONZE_TABLE, TIMESTAMP_FORMAT,
};
pub use visit::{AcuityLevel, AgeGroup, ChiefComplaint, DomainError, EdVisit};
