//! Error types for the CSV populator.

use thiserror::Error;

/// Errors that can occur during CSV population.
#[derive(Error, Debug)]
pub enum CSVPopulatorError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Generator configuration error.
    #[error("Generator config error: {0}")]
    Config(#[from] ed_generator::ConfigError),
}
