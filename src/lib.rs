//! ed-bronze library
//!
//! Loads synthetic emergency department visits into a PostgreSQL bronze
//! (staging) table.
//!
//! # Crates
//!
//! - `ed_core` - visit record, enumerated fields and the bronze column contract
//! - `ed_generator` - seeded visit generator and dataset summary
//! - `ed_populate_csv` - writes generated visits to the CSV file
//! - `ed_csv_source` - reads the CSV file back into typed visits
//! - `bronze_sink` - the `BronzeSink` trait and an in-memory sink
//! - `bronze_postgresql` - the PostgreSQL sink
//!
//! # CLI Usage
//!
//! ```bash
//! # Write ed_visits_synthetic.csv with 300 visits (seed 42)
//! ed-bronze generate
//!
//! # Print the table definition the loader expects
//! ed-bronze ddl | psql ed_analytics
//!
//! # Replace the bronze table contents with the file
//! ed-bronze load --host localhost --database ed_analytics
//! ```

pub mod load;
pub mod troubleshooting;

pub use load::{
    load_file, load_visits, log_cleaned_visits, LoadReport, PROGRESS_INTERVAL, SAMPLE_SIZE,
};
pub use troubleshooting::{failure_report, render_hints, TROUBLESHOOTING_HINTS};
