//! CSV source for the bronze loader.
//!
//! Reads a visit file written by `ed-populate-csv` (or by hand), checks the
//! header against the bronze column list, trims every field and coerces it
//! to its declared type. Any malformed field aborts the whole read; rows are
//! never skipped.

mod coerce;
mod error;
mod reader;

pub use coerce::{coerce_record, parse_timestamp};
pub use error::CsvSourceError;
pub use reader::{read_visits, read_visits_from};
