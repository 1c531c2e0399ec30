//! Field coercion: trimmed CSV strings → typed `EdVisit` fields.

use crate::error::CsvSourceError;
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;
use ed_core::{AcuityLevel, AgeGroup, ChiefComplaint, EdVisit};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Timestamp layouts accepted in the arrival_time column.
const TIMESTAMP_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp string in the formats the loader accepts.
///
/// A bare date (`2024-11-01`) is read as midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    for format in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Coerce one already-trimmed record into a visit.
///
/// `row` is the 1-based data row number used in error messages. The record
/// must have the seven bronze columns in order; the CSV reader enforces the
/// column count.
pub fn coerce_record(row: u64, record: &StringRecord) -> Result<EdVisit, CsvSourceError> {
    let field = |index: usize| record.get(index).unwrap_or_default();
    let fail = |column: &'static str, value: &str, reason: String| CsvSourceError::Coercion {
        row,
        column,
        value: value.to_string(),
        reason,
    };

    let patient_id = field(0);
    if patient_id.is_empty() {
        return Err(fail("patient_id", patient_id, "value is empty".to_string()));
    }

    let raw = field(1);
    let arrival_time = parse_timestamp(raw)
        .ok_or_else(|| fail("arrival_time", raw, "not a recognised timestamp".to_string()))?;

    let raw = field(2);
    let acuity_level = raw
        .parse::<i64>()
        .map_err(|e| e.to_string())
        .and_then(|level| AcuityLevel::new(level).map_err(|e| e.to_string()))
        .map_err(|reason| fail("acuity_level", raw, reason))?;

    let raw = field(3);
    let age_group =
        AgeGroup::from_str(raw).map_err(|e| fail("age_group", raw, e.to_string()))?;

    let raw = field(4);
    let chief_complaint =
        ChiefComplaint::from_str(raw).map_err(|e| fail("chief_complaint", raw, e.to_string()))?;

    let raw = field(5);
    let wait_time_minutes = raw
        .parse::<i32>()
        .map_err(|e| fail("wait_time_minutes", raw, e.to_string()))?;

    let raw = field(6);
    let length_of_stay_hours = Decimal::from_str(raw)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .map_err(|e| fail("length_of_stay_hours", raw, e.to_string()))?;

    Ok(EdVisit {
        patient_id: patient_id.to_string(),
        arrival_time,
        acuity_level,
        age_group,
        chief_complaint,
        wait_time_minutes,
        length_of_stay_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn record(fields: [&str; 7]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    fn valid() -> [&'static str; 7] {
        [
            "PT0001",
            "2024-11-01 08:30:00",
            "3",
            "35-54",
            "Chest Pain",
            "42",
            "2.75",
        ]
    }

    #[test]
    fn test_coerce_valid_record() {
        let visit = coerce_record(1, &record(valid())).unwrap();

        assert_eq!(visit.patient_id, "PT0001");
        assert_eq!(visit.arrival_time.hour(), 8);
        assert_eq!(visit.acuity_level.get(), 3);
        assert_eq!(visit.age_group, AgeGroup::Adult);
        assert_eq!(visit.chief_complaint, ChiefComplaint::ChestPain);
        assert_eq!(visit.wait_time_minutes, 42);
        assert_eq!(visit.length_of_stay_hours, Decimal::new(275, 2));
    }

    #[test]
    fn test_stay_rounds_half_away_from_zero() {
        let mut fields = valid();
        fields[6] = "2.345";

        let visit = coerce_record(1, &record(fields)).unwrap();

        assert_eq!(visit.length_of_stay_hours, Decimal::new(235, 2));
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 11, 1)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();

        assert_eq!(parse_timestamp("2024-11-01 08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-11-01T08:30:00"), Some(expected));
        assert_eq!(parse_timestamp("2024-11-01 08:30:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2024-11-01 08:30"), Some(expected));
        assert_eq!(
            parse_timestamp("2024-11-01"),
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(parse_timestamp("yesterday"), None);
        assert_eq!(parse_timestamp("2024-13-01 00:00:00"), None);
    }

    #[test]
    fn test_non_numeric_wait_time() {
        let mut fields = valid();
        fields[5] = "soon";

        let err = coerce_record(7, &record(fields)).unwrap_err();

        match err {
            CsvSourceError::Coercion {
                row, column, value, ..
            } => {
                assert_eq!(row, 7);
                assert_eq!(column, "wait_time_minutes");
                assert_eq!(value, "soon");
            }
            other => panic!("Expected coercion error, got {other:?}"),
        }
    }

    #[test]
    fn test_acuity_out_of_domain() {
        let mut fields = valid();
        fields[2] = "6";

        let err = coerce_record(1, &record(fields)).unwrap_err();
        assert!(matches!(
            err,
            CsvSourceError::Coercion {
                column: "acuity_level",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_labels() {
        let mut fields = valid();
        fields[3] = "elderly";
        assert!(matches!(
            coerce_record(1, &record(fields)).unwrap_err(),
            CsvSourceError::Coercion {
                column: "age_group",
                ..
            }
        ));

        let mut fields = valid();
        fields[4] = "Toothache";
        assert!(matches!(
            coerce_record(1, &record(fields)).unwrap_err(),
            CsvSourceError::Coercion {
                column: "chief_complaint",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_patient_id() {
        let mut fields = valid();
        fields[0] = "";
        assert!(matches!(
            coerce_record(1, &record(fields)).unwrap_err(),
            CsvSourceError::Coercion {
                column: "patient_id",
                ..
            }
        ));
    }

    #[test]
    fn test_decimal_coercion() {
        let mut fields = valid();
        fields[6] = "3.5";
        let visit = coerce_record(1, &record(fields)).unwrap();
        assert_eq!(visit.length_of_stay_hours, Decimal::new(350, 2));

        let mut fields = valid();
        fields[6] = "three";
        assert!(coerce_record(1, &record(fields)).is_err());
    }
}
