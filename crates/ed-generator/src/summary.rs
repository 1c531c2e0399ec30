//! Descriptive summary of a generated dataset.

use chrono::NaiveDateTime;
use ed_core::{AcuityLevel, EdVisit, TIMESTAMP_FORMAT};
use rust_decimal::Decimal;
use std::fmt;

/// Row count, arrival window, acuity mix and numeric ranges of a dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub first_arrival: Option<NaiveDateTime>,
    pub last_arrival: Option<NaiveDateTime>,
    /// Count per acuity level, index 0 is level 1
    pub acuity_counts: [usize; 5],
    pub wait_time_minutes: Option<(i32, f64, i32)>,
    pub length_of_stay_hours: Option<(Decimal, Decimal, Decimal)>,
}

impl DatasetSummary {
    pub fn from_visits(visits: &[EdVisit]) -> Self {
        let mut acuity_counts = [0usize; 5];
        for visit in visits {
            acuity_counts[(visit.acuity_level.get() - 1) as usize] += 1;
        }

        let wait_time_minutes = match (
            visits.iter().map(|v| v.wait_time_minutes).min(),
            visits.iter().map(|v| v.wait_time_minutes).max(),
        ) {
            (Some(min), Some(max)) => {
                let total: i64 = visits.iter().map(|v| i64::from(v.wait_time_minutes)).sum();
                Some((min, total as f64 / visits.len() as f64, max))
            }
            _ => None,
        };

        let length_of_stay_hours = match (
            visits.iter().map(|v| v.length_of_stay_hours).min(),
            visits.iter().map(|v| v.length_of_stay_hours).max(),
        ) {
            (Some(min), Some(max)) => {
                let total: Decimal = visits.iter().map(|v| v.length_of_stay_hours).sum();
                let mean = (total / Decimal::from(visits.len())).round_dp(2);
                Some((min, mean, max))
            }
            _ => None,
        };

        Self {
            row_count: visits.len(),
            first_arrival: visits.iter().map(|v| v.arrival_time).min(),
            last_arrival: visits.iter().map(|v| v.arrival_time).max(),
            acuity_counts,
            wait_time_minutes,
            length_of_stay_hours,
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "rows: {}", self.row_count)?;
        if let (Some(first), Some(last)) = (self.first_arrival, self.last_arrival) {
            writeln!(
                f,
                "arrival_time: {} .. {}",
                first.format(TIMESTAMP_FORMAT),
                last.format(TIMESTAMP_FORMAT)
            )?;
        }
        let mix = AcuityLevel::ALL
            .iter()
            .zip(self.acuity_counts)
            .map(|(level, count)| format!("{level}={count}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(f, "acuity_level: {mix}")?;
        if let Some((min, mean, max)) = self.wait_time_minutes {
            writeln!(f, "wait_time_minutes: min={min} mean={mean:.2} max={max}")?;
        }
        if let Some((min, mean, max)) = self.length_of_stay_hours {
            write!(f, "length_of_stay_hours: min={min} mean={mean} max={max}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ed_core::{AgeGroup, ChiefComplaint};

    fn visit(id: u64, hour: u32, acuity: i64, wait: i32, stay_hundredths: i64) -> EdVisit {
        EdVisit {
            patient_id: EdVisit::patient_id_for(id),
            arrival_time: NaiveDate::from_ymd_opt(2024, 11, 1)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            acuity_level: AcuityLevel::new(acuity).unwrap(),
            age_group: AgeGroup::Adult,
            chief_complaint: ChiefComplaint::Fever,
            wait_time_minutes: wait,
            length_of_stay_hours: Decimal::new(stay_hundredths, 2),
        }
    }

    #[test]
    fn test_summary_of_small_dataset() {
        let visits = vec![visit(1, 3, 3, 10, 150), visit(2, 1, 1, 30, 250)];

        let summary = DatasetSummary::from_visits(&visits);

        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.acuity_counts, [1, 0, 1, 0, 0]);
        assert_eq!(summary.first_arrival, Some(visits[1].arrival_time));
        assert_eq!(summary.last_arrival, Some(visits[0].arrival_time));
        assert_eq!(summary.wait_time_minutes, Some((10, 20.0, 30)));
        assert_eq!(
            summary.length_of_stay_hours,
            Some((Decimal::new(150, 2), Decimal::new(200, 2), Decimal::new(250, 2)))
        );

        let text = summary.to_string();
        assert!(text.contains("rows: 2"));
        assert!(text.contains("acuity_level: 1=1 2=0 3=1 4=0 5=0"));
    }

    #[test]
    fn test_summary_of_empty_dataset() {
        let summary = DatasetSummary::from_visits(&[]);

        assert_eq!(summary.row_count, 0);
        assert_eq!(summary.first_arrival, None);
        assert_eq!(summary.wait_time_minutes, None);
        assert_eq!(summary.length_of_stay_hours, None);
    }
}
