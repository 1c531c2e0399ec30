//! CLI argument definitions for the PostgreSQL sink.

use crate::error::PostgreSQLSinkError;
use clap::{Args, ValueEnum};
use ed_core::DEFAULT_BRONZE_TABLE;

/// How the loader authenticates to PostgreSQL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AuthMode {
    /// No password is sent; the server must trust this client (pg_hba `trust`).
    Trusted,
    /// User name and password.
    Password,
}

/// Connection descriptor for the bronze table.
#[derive(Args, Clone, Debug)]
pub struct PostgreSQLSinkArgs {
    /// PostgreSQL server host
    #[arg(long, env = "ED_BRONZE_PG_HOST", default_value = "localhost")]
    pub host: String,

    /// PostgreSQL server port
    #[arg(long, env = "ED_BRONZE_PG_PORT", default_value = "5432")]
    pub port: u16,

    /// Database holding the bronze table
    #[arg(long, env = "ED_BRONZE_PG_DATABASE", default_value = "ed_analytics")]
    pub database: String,

    /// Destination table, optionally schema-qualified
    #[arg(long, env = "ED_BRONZE_TABLE", default_value = DEFAULT_BRONZE_TABLE)]
    pub table: String,

    /// Authentication mode
    #[arg(long, env = "ED_BRONZE_PG_AUTH", value_enum, default_value = "trusted")]
    pub auth: AuthMode,

    /// User name
    #[arg(long, env = "ED_BRONZE_PG_USER", default_value = "postgres")]
    pub user: String,

    /// Password (required with --auth password)
    #[arg(long, env = "ED_BRONZE_PG_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl PostgreSQLSinkArgs {
    /// Build the driver configuration from the descriptor.
    pub fn pg_config(&self) -> Result<tokio_postgres::Config, PostgreSQLSinkError> {
        let mut config = tokio_postgres::Config::new();
        config
            .host(&self.host)
            .port(self.port)
            .dbname(&self.database)
            .user(&self.user)
            .application_name("ed-bronze");

        match self.auth {
            AuthMode::Trusted => {
                if self.password.is_some() {
                    tracing::warn!("Ignoring --password with --auth trusted");
                }
            }
            AuthMode::Password => {
                let password = self.password.as_deref().ok_or_else(|| {
                    PostgreSQLSinkError::Config(
                        "--auth password requires --password or ED_BRONZE_PG_PASSWORD".to_string(),
                    )
                })?;
                config.password(password);
            }
        }

        Ok(config)
    }

    /// Short description for logs, never including the password.
    pub fn describe(&self) -> String {
        format!(
            "{}@{}:{}/{} (table {}, auth {:?})",
            self.user, self.host, self.port, self.database, self.table, self.auth
        )
    }
}
