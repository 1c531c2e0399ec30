//! Command-line interface for ed-bronze
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 300 visits, seed 42, written to ed_visits_synthetic.csv
//! ed-bronze generate
//!
//! # Custom size and seed
//! ed-bronze generate --output visits.csv --row-count 1000 --seed 7
//!
//! # Weight tables and ranges from YAML
//! ed-bronze generate --config generator.yaml
//! ```
//!
//! ## Load
//! ```bash
//! # Trusted connection
//! ed-bronze load --input ed_visits_synthetic.csv \
//!   --host localhost --database ed_analytics
//!
//! # Password authentication
//! ED_BRONZE_PG_PASSWORD=secret ed-bronze load --auth password --user loader
//!
//! # Validate the file and run the load without a database
//! ed-bronze load --dry-run
//! ```
//!
//! ## DDL
//! ```bash
//! ed-bronze ddl --table bronze_ed_visits
//! ```

use anyhow::Context;
use bronze_postgresql::PostgreSQLSinkArgs;
use clap::{Parser, Subcommand};
use ed_bronze::{failure_report, load_file, LoadReport};
use ed_core::{create_table_ddl, DEFAULT_BRONZE_TABLE};
use ed_populate_csv::{CSVPopulateArgs, CSVPopulator, DEFAULT_OUTPUT_FILE};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ed-bronze")]
#[command(about = "Generate synthetic ED visits and load them into a bronze table")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the synthetic visit CSV file
    Generate(CSVPopulateArgs),

    /// Replace the bronze table contents with the rows of a CSV file
    Load {
        /// CSV file produced by `generate`
        #[arg(long, short = 'i', default_value = DEFAULT_OUTPUT_FILE)]
        input: PathBuf,

        /// Run the load against an in-memory table instead of PostgreSQL
        #[arg(long)]
        dry_run: bool,

        #[command(flatten)]
        connection: PostgreSQLSinkArgs,
    },

    /// Print the CREATE TABLE statement for the bronze table
    Ddl {
        /// Table name, optionally schema-qualified
        #[arg(long, default_value = DEFAULT_BRONZE_TABLE)]
        table: String,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let show_hints = matches!(cli.command, Commands::Load { .. });

    if let Err(e) = run(cli).await {
        eprintln!("{}", failure_report(&e, show_hints));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Load {
            input,
            dry_run,
            connection,
        } => run_load(input, dry_run, connection).await,
        Commands::Ddl { table } => {
            println!("{};", create_table_ddl(&table)?);
            Ok(())
        }
    }
}

fn run_generate(args: CSVPopulateArgs) -> anyhow::Result<()> {
    let config = args
        .generator_config()
        .context("Invalid generator configuration")?;
    tracing::info!(
        "Generating {} visits with seed {}",
        config.row_count,
        config.seed
    );

    let mut populator = CSVPopulator::new(config)?;
    let metrics = populator
        .populate(&args.output)
        .with_context(|| format!("Failed to write '{}'", args.output.display()))?;

    tracing::info!(
        "Generated {} ED visits -> {} ({} bytes)",
        metrics.rows_written,
        args.output.display(),
        metrics.file_size_bytes
    );
    for line in metrics.summary.to_string().lines() {
        tracing::info!("  {}", line);
    }
    for visit in &metrics.preview {
        tracing::info!("  {}", visit);
    }

    Ok(())
}

async fn run_load(
    input: PathBuf,
    dry_run: bool,
    connection: PostgreSQLSinkArgs,
) -> anyhow::Result<()> {
    let report = load_file(&input, dry_run, &connection).await?;
    log_report(&report);
    Ok(())
}

fn log_report(report: &LoadReport) {
    tracing::info!(
        "Load complete: {} rows in {:?} ({:.0} rows/sec)",
        report.rows_inserted,
        report.total_duration,
        report.rows_per_second()
    );
    tracing::info!("Sample rows:");
    for visit in &report.sample {
        tracing::info!("  {}", visit);
    }
}
