//! Generator configuration.
//!
//! Every value the generator depends on lives here: record count, seed, the
//! arrival window, the categorical weight tables and the numeric ranges. The
//! defaults reproduce the reference dataset (300 visits, seed 42).
//!
//! # YAML Format
//!
//! All keys are optional; missing keys take their default value.
//!
//! ```yaml
//! row_count: 300
//! seed: 42
//! base_date: 2024-11-01
//! window_days: 18
//! acuity_weights: [0.05, 0.15, 0.35, 0.30, 0.15]
//! age_group_weights: [0.10, 0.25, 0.30, 0.25, 0.10]
//! wait_time_minutes: { min: 5, max: 180 }
//! length_of_stay_hours: { min: 0.5, max: 8.0 }
//! ```

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use ed_core::{AcuityLevel, AgeGroup};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Largest length of stay, in hundredths of an hour, the bronze column holds.
const MAX_STAY_HUNDREDTHS: f64 = 9999.0;

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read generator config: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// A weight table cannot drive a categorical draw
    #[error("Invalid weights for {table}: {reason}")]
    InvalidWeights { table: &'static str, reason: String },

    /// A numeric range is empty or out of domain
    #[error("Invalid range for {field}: {reason}")]
    InvalidRange { field: &'static str, reason: String },
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub min: i32,
    pub max: i32,
}

/// Inclusive real range; draws are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalRange {
    pub min: f64,
    pub max: f64,
}

/// Configuration for [`crate::VisitGenerator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Number of visits to generate
    pub row_count: u64,
    /// Seed for the generator's `StdRng`
    pub seed: u64,
    /// Midnight of this date is the earliest possible arrival
    pub base_date: NaiveDate,
    /// Largest day offset from `base_date` (inclusive)
    pub window_days: u32,
    /// One weight per acuity level, most severe first
    pub acuity_weights: Vec<f64>,
    /// One weight per age group, youngest first
    pub age_group_weights: Vec<f64>,
    pub wait_time_minutes: IntRange,
    pub length_of_stay_hours: DecimalRange,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            row_count: 300,
            seed: 42,
            base_date: NaiveDate::from_ymd_opt(2024, 11, 1).unwrap_or_default(),
            window_days: 18,
            acuity_weights: vec![0.05, 0.15, 0.35, 0.30, 0.15],
            age_group_weights: vec![0.10, 0.25, 0.30, 0.25, 0.10],
            wait_time_minutes: IntRange { min: 5, max: 180 },
            length_of_stay_hours: DecimalRange { min: 0.5, max: 8.0 },
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: GeneratorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Override the record count.
    pub fn with_row_count(mut self, row_count: u64) -> Self {
        self.row_count = row_count;
        self
    }

    /// Override the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the weight tables and ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_weights("acuity_weights", &self.acuity_weights, AcuityLevel::ALL.len())?;
        validate_weights(
            "age_group_weights",
            &self.age_group_weights,
            AgeGroup::ALL.len(),
        )?;

        let wait = self.wait_time_minutes;
        if wait.min > wait.max {
            return Err(ConfigError::InvalidRange {
                field: "wait_time_minutes",
                reason: format!("min {} is greater than max {}", wait.min, wait.max),
            });
        }

        let stay = self.length_of_stay_hours;
        if !stay.min.is_finite() || !stay.max.is_finite() {
            return Err(ConfigError::InvalidRange {
                field: "length_of_stay_hours",
                reason: "bounds must be finite".to_string(),
            });
        }
        if stay.min < 0.0 {
            return Err(ConfigError::InvalidRange {
                field: "length_of_stay_hours",
                reason: format!("min {} is negative", stay.min),
            });
        }
        if stay.min > stay.max {
            return Err(ConfigError::InvalidRange {
                field: "length_of_stay_hours",
                reason: format!("min {} is greater than max {}", stay.min, stay.max),
            });
        }
        // Values are rounded to hundredths and stored as NUMERIC(4,2)
        if (stay.max * 100.0).round() > MAX_STAY_HUNDREDTHS {
            return Err(ConfigError::InvalidRange {
                field: "length_of_stay_hours",
                reason: format!("max {} does not fit NUMERIC(4,2)", stay.max),
            });
        }

        let window_end = NaiveDateTime::new(self.base_date, NaiveTime::MIN)
            .checked_add_signed(Duration::days(i64::from(self.window_days)))
            .and_then(|day| day.checked_add_signed(Duration::hours(23) + Duration::minutes(59)));
        if window_end.is_none() {
            return Err(ConfigError::InvalidRange {
                field: "window_days",
                reason: format!(
                    "{} days after {} is not a representable date",
                    self.window_days, self.base_date
                ),
            });
        }

        Ok(())
    }
}

fn validate_weights(
    table: &'static str,
    weights: &[f64],
    expected: usize,
) -> Result<(), ConfigError> {
    if weights.len() != expected {
        return Err(ConfigError::InvalidWeights {
            table,
            reason: format!("expected {expected} weights, found {}", weights.len()),
        });
    }
    if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(ConfigError::InvalidWeights {
            table,
            reason: format!("weight {bad} is not a finite non-negative number"),
        });
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(ConfigError::InvalidWeights {
            table,
            reason: "weights sum to zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeneratorConfig::default();
        config.validate().unwrap();
        assert_eq!(config.row_count, 300);
        assert_eq!(config.seed, 42);
        assert_eq!(config.base_date, NaiveDate::from_ymd_opt(2024, 11, 1).unwrap());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = GeneratorConfig::from_yaml("row_count: 25\nseed: 7\n").unwrap();
        assert_eq!(config.row_count, 25);
        assert_eq!(config.seed, 7);
        assert_eq!(config.window_days, 18);
        assert_eq!(config.wait_time_minutes, IntRange { min: 5, max: 180 });
    }

    #[test]
    fn test_yaml_base_date() {
        let config = GeneratorConfig::from_yaml("base_date: 2025-01-15\nwindow_days: 3\n").unwrap();
        assert_eq!(config.base_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(config.window_days, 3);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = GeneratorConfig::from_yaml("rows: 10\n");
        assert!(matches!(result, Err(ConfigError::YamlError(_))));
    }

    #[test]
    fn test_wrong_weight_count() {
        let result = GeneratorConfig::from_yaml("acuity_weights: [0.5, 0.5]\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidWeights {
                table: "acuity_weights",
                ..
            })
        ));
    }

    #[test]
    fn test_negative_and_zero_weights() {
        let negative = GeneratorConfig::from_yaml("age_group_weights: [1, 1, -1, 1, 1]\n");
        assert!(matches!(negative, Err(ConfigError::InvalidWeights { .. })));

        let zero = GeneratorConfig::from_yaml("age_group_weights: [0, 0, 0, 0, 0]\n");
        assert!(matches!(zero, Err(ConfigError::InvalidWeights { .. })));
    }

    #[test]
    fn test_inverted_ranges() {
        let wait = GeneratorConfig::from_yaml("wait_time_minutes: { min: 200, max: 5 }\n");
        assert!(matches!(
            wait,
            Err(ConfigError::InvalidRange {
                field: "wait_time_minutes",
                ..
            })
        ));

        let stay = GeneratorConfig::from_yaml("length_of_stay_hours: { min: -1.0, max: 2.0 }\n");
        assert!(matches!(
            stay,
            Err(ConfigError::InvalidRange {
                field: "length_of_stay_hours",
                ..
            })
        ));
    }

    #[test]
    fn test_window_past_calendar_end_rejected() {
        let result = GeneratorConfig::from_yaml("window_days: 4000000000\nrow_count: 1\n");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRange {
                field: "window_days",
                ..
            })
        ));
    }

    #[test]
    fn test_stay_max_must_fit_column() {
        let too_long =
            GeneratorConfig::from_yaml("length_of_stay_hours: { min: 1.0, max: 100.0 }\n");
        assert!(matches!(
            too_long,
            Err(ConfigError::InvalidRange {
                field: "length_of_stay_hours",
                ..
            })
        ));

        let rounds_up =
            GeneratorConfig::from_yaml("length_of_stay_hours: { min: 1.0, max: 99.999 }\n");
        assert!(rounds_up.is_err());

        GeneratorConfig::from_yaml("length_of_stay_hours: { min: 1.0, max: 99.99 }\n").unwrap();
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "row_count: 12").unwrap();
        let config = GeneratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.row_count, 12);
    }
}
