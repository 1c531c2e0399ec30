//! Reading a visit file into memory.

use crate::coerce::coerce_record;
use crate::error::CsvSourceError;
use csv::{ReaderBuilder, StringRecord, Trim};
use ed_core::{column_names, EdVisit};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Read and clean every visit in a CSV file, preserving file order.
pub fn read_visits<P: AsRef<Path>>(path: P) -> Result<Vec<EdVisit>, CsvSourceError> {
    let path = path.as_ref();
    info!("Reading CSV file '{}'", path.display());
    let file = File::open(path)?;
    read_visits_from(file)
}

/// Read and clean every visit from any reader.
///
/// Headers and fields are trimmed before validation. The first malformed
/// row aborts the read.
pub fn read_visits_from<R: Read>(reader: R) -> Result<Vec<EdVisit>, CsvSourceError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    check_header(csv_reader.headers()?)?;

    let mut visits = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        visits.push(coerce_record(index as u64 + 1, &record)?);
    }

    debug!("Cleaned {} rows", visits.len());
    Ok(visits)
}

fn check_header(headers: &StringRecord) -> Result<(), CsvSourceError> {
    let expected = column_names();
    if headers.iter().eq(expected.iter().copied()) {
        return Ok(());
    }

    Err(CsvSourceError::HeaderMismatch {
        expected: expected.iter().map(|s| s.to_string()).collect(),
        found: headers.iter().map(|s| s.to_string()).collect(),
    })
}
