//! CSV file populator for the ed-bronze pipeline.
//!
//! This crate writes ED visits produced by the `ed-generator` crate to a
//! delimited file: one header row, then one row per visit in bronze column
//! order.
//!
//! # Example
//!
//! ```ignore
//! use ed_generator::GeneratorConfig;
//! use ed_populate_csv::CSVPopulator;
//!
//! let mut populator = CSVPopulator::new(GeneratorConfig::default())?;
//!
//! // Generate ed_visits_synthetic.csv with 300 visits
//! let metrics = populator.populate("ed_visits_synthetic.csv")?;
//! ```

pub mod args;
mod error;
mod populator;

pub use args::{CSVPopulateArgs, DEFAULT_OUTPUT_FILE};
pub use error::CSVPopulatorError;
pub use populator::{visit_to_csv_record, CSVPopulator, PopulateMetrics, PREVIEW_ROWS};
