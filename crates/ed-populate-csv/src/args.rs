//! CLI argument definitions for the CSV populator.

use clap::Args;
use ed_generator::{ConfigError, GeneratorConfig};
use std::path::PathBuf;

/// File name the original pipeline writes and the loader reads by default.
pub const DEFAULT_OUTPUT_FILE: &str = "ed_visits_synthetic.csv";

/// Arguments for generating the visit CSV file.
#[derive(Args, Clone, Debug)]
pub struct CSVPopulateArgs {
    /// Output CSV file (overwritten if present)
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Generator config YAML file (defaults apply to missing keys)
    #[arg(long, short = 'c', env = "ED_BRONZE_GENERATOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of visits to generate (overrides the config file)
    #[arg(long)]
    pub row_count: Option<u64>,

    /// Random seed for deterministic generation (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
}

impl CSVPopulateArgs {
    /// Resolve the generator configuration: file or defaults, then overrides.
    pub fn generator_config(&self) -> Result<GeneratorConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(row_count) = self.row_count {
            config = config.with_row_count(row_count);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(
        config: Option<PathBuf>,
        row_count: Option<u64>,
        seed: Option<u64>,
    ) -> CSVPopulateArgs {
        CSVPopulateArgs {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            config,
            row_count,
            seed,
        }
    }

    #[test]
    fn test_defaults_without_file() {
        let config = args(None, None, None).generator_config().unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "row_count: 10\nseed: 1\nwindow_days: 2").unwrap();

        let config = args(Some(file.path().to_path_buf()), Some(20), None)
            .generator_config()
            .unwrap();

        assert_eq!(config.row_count, 20);
        assert_eq!(config.seed, 1);
        assert_eq!(config.window_days, 2);
    }

    #[test]
    fn test_missing_file() {
        let result =
            args(Some(PathBuf::from("/nonexistent/gen.yaml")), None, None).generator_config();
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }
}
