//! CSV populator for ED visits.

use crate::error::CSVPopulatorError;
use csv::Writer;
use ed_core::{column_names, EdVisit, TIMESTAMP_FORMAT};
use ed_generator::{DatasetSummary, GeneratorConfig, VisitGenerator};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for CSV writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Leading rows kept in the metrics for display.
pub const PREVIEW_ROWS: usize = 5;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of rows written (header excluded).
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating data.
    pub generation_duration: Duration,
    /// Time spent writing data.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
    /// Summary of the rows written.
    pub summary: DatasetSummary,
    /// First rows in file order.
    pub preview: Vec<EdVisit>,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// CSV populator that generates a visit file.
pub struct CSVPopulator {
    generator: VisitGenerator,
}

impl CSVPopulator {
    /// Create a new CSV populator from a generator configuration.
    pub fn new(config: GeneratorConfig) -> Result<Self, CSVPopulatorError> {
        Ok(Self {
            generator: VisitGenerator::new(config)?,
        })
    }

    /// Generate the configured number of visits, sort them by arrival time
    /// and write them to `output_path`, replacing any existing file.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        output_path: P,
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();

        let gen_start = Instant::now();
        let visits = self.generator.generate_sorted();
        let generation_duration = gen_start.elapsed();

        let mut metrics = Self::write(output_path, &visits)?;
        metrics.generation_duration = generation_duration;
        metrics.total_duration = start_time.elapsed();

        Ok(metrics)
    }

    /// Write visits to `output_path` in their given order, header first.
    fn write<P: AsRef<Path>>(
        output_path: P,
        visits: &[EdVisit],
    ) -> Result<PopulateMetrics, CSVPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing CSV file '{}' with {} visits",
            output_path.display(),
            visits.len()
        );

        let file = File::create(output_path)?;
        let buf_writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        metrics.rows_written = write_visits(buf_writer, visits)?;

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.write_duration = start_time.elapsed();
        metrics.total_duration = metrics.write_duration;
        metrics.summary = DatasetSummary::from_visits(visits);
        metrics.preview = visits.iter().take(PREVIEW_ROWS).cloned().collect();

        info!(
            "CSV generation complete: {} rows, {} bytes in {:?}",
            metrics.rows_written, metrics.file_size_bytes, metrics.total_duration
        );

        Ok(metrics)
    }
}

/// Write the header and visits as CSV to any writer, returning the number of
/// data rows.
fn write_visits<W: Write>(out: W, visits: &[EdVisit]) -> Result<u64, CSVPopulatorError> {
    let mut writer = Writer::from_writer(out);
    writer.write_record(column_names())?;

    let mut rows_written = 0u64;
    for visit in visits {
        writer.write_record(visit_to_csv_record(visit))?;
        rows_written += 1;

        if rows_written % 100 == 0 {
            debug!("Written {} rows", rows_written);
        }
    }

    writer.flush()?;
    Ok(rows_written)
}

/// Convert a visit to its CSV fields in bronze column order.
pub fn visit_to_csv_record(visit: &EdVisit) -> [String; 7] {
    [
        visit.patient_id.clone(),
        visit.arrival_time.format(TIMESTAMP_FORMAT).to_string(),
        visit.acuity_level.to_string(),
        visit.age_group.as_str().to_string(),
        visit.chief_complaint.as_str().to_string(),
        visit.wait_time_minutes.to_string(),
        visit.length_of_stay_hours.to_string(),
    ]
}
