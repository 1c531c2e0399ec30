//! The bronze load procedure.
//!
//! Truncate and every insert run inside one transaction, so a failure at any
//! point before commit leaves the table as it was.

use anyhow::{Context, Result};
use bronze_postgresql::{PostgreSQLSink, PostgreSQLSinkArgs};
use bronze_sink::{BronzeSink, MemorySink};
use ed_core::{EdVisit, BRONZE_COLUMNS};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Emit a progress message after this many inserts.
pub const PROGRESS_INTERVAL: u64 = 50;

/// Rows read back after commit.
pub const SAMPLE_SIZE: u32 = 3;

/// Outcome of a committed load.
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub rows_inserted: u64,
    /// Row count reported by the store after commit
    pub verified_count: u64,
    pub sample: Vec<EdVisit>,
    pub insert_duration: Duration,
    pub total_duration: Duration,
}

impl LoadReport {
    pub fn is_consistent(&self) -> bool {
        self.rows_inserted == self.verified_count
    }

    pub fn rows_per_second(&self) -> f64 {
        if self.insert_duration.as_secs_f64() > 0.0 {
            self.rows_inserted as f64 / self.insert_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Replace the sink's contents with `visits`, then verify.
pub async fn load_visits<S>(sink: &mut S, visits: &[EdVisit]) -> Result<LoadReport>
where
    S: BronzeSink + ?Sized,
{
    let start_time = Instant::now();

    sink.begin().await?;

    let insert_start = Instant::now();
    let rows_inserted = match replace_and_commit(sink, visits).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!("Load failed, rolling back: {e:#}");
            if let Err(rollback_err) = sink.rollback().await {
                warn!("Rollback failed: {rollback_err:#}");
            }
            return Err(e);
        }
    };
    let insert_duration = insert_start.elapsed();
    info!("Committed {} rows in {:?}", rows_inserted, insert_duration);

    let verified_count = sink
        .row_count()
        .await
        .context("Failed to verify row count")?;
    let sample = sink
        .sample(SAMPLE_SIZE)
        .await
        .context("Failed to read sample rows")?;

    let report = LoadReport {
        rows_inserted,
        verified_count,
        sample,
        insert_duration,
        total_duration: start_time.elapsed(),
    };

    info!("Verified: {} rows in database", report.verified_count);
    if !report.is_consistent() {
        warn!(
            "Row count mismatch: inserted {} but found {}",
            report.rows_inserted, report.verified_count
        );
    }

    Ok(report)
}

async fn replace_and_commit<S>(sink: &mut S, visits: &[EdVisit]) -> Result<u64>
where
    S: BronzeSink + ?Sized,
{
    sink.truncate().await?;

    let mut inserted = 0u64;
    for visit in visits {
        sink.insert(visit)
            .await
            .with_context(|| format!("Insert failed after {inserted} rows"))?;
        inserted += 1;

        if inserted % PROGRESS_INTERVAL == 0 {
            info!("Inserted {} rows...", inserted);
        }
    }

    sink.commit().await?;
    Ok(inserted)
}

/// Read `input` and load it into PostgreSQL, or into memory when `dry_run`.
///
/// The file is fully read and coerced before any connection is opened.
pub async fn load_file(
    input: &Path,
    dry_run: bool,
    connection: &PostgreSQLSinkArgs,
) -> Result<LoadReport> {
    let visits = ed_csv_source::read_visits(input)
        .with_context(|| format!("Failed to read visits from '{}'", input.display()))?;
    log_cleaned_visits(&visits);

    if dry_run {
        info!("Running in dry-run mode - no data will be written to PostgreSQL");
        let mut sink = MemorySink::new();
        return load_visits(&mut sink, &visits).await;
    }

    let mut sink = PostgreSQLSink::connect(connection)
        .await
        .context("Failed to connect to PostgreSQL")?;
    load_visits(&mut sink, &visits)
        .await
        .with_context(|| format!("Failed to load into {}", sink.table()))
}

/// Log what was read from the file: row count, column types, first rows.
pub fn log_cleaned_visits(visits: &[EdVisit]) {
    info!("Loaded and cleaned {} rows", visits.len());
    for column in BRONZE_COLUMNS {
        info!("  {}: {}", column.name, column.sql_type);
    }
    for visit in visits.iter().take(SAMPLE_SIZE as usize) {
        info!("  {}", visit);
    }
}
