//! PostgreSQL implementation of the bronze sink.

use crate::args::PostgreSQLSinkArgs;
use crate::error::PostgreSQLSinkError;
use crate::sql;
use anyhow::{Context, Result};
use bronze_sink::BronzeSink;
use chrono::NaiveDateTime;
use ed_core::{quote_table_name, AcuityLevel, AgeGroup, ChiefComplaint, EdVisit};
use rust_decimal::Decimal;
use tokio_postgres::{Client, NoTls, Row, Statement};
use tracing::{debug, error, info};

/// Bronze sink writing to an existing PostgreSQL table.
pub struct PostgreSQLSink {
    client: Client,
    /// Quoted table name
    table: String,
    insert: Statement,
}

impl PostgreSQLSink {
    /// Connect using the CLI connection descriptor.
    pub async fn connect(args: &PostgreSQLSinkArgs) -> Result<Self, PostgreSQLSinkError> {
        info!("Connecting to PostgreSQL {}", args.describe());
        let config = args.pg_config()?;
        Self::connect_with(config, &args.table).await
    }

    /// Connect with an explicit driver configuration.
    pub async fn connect_with(
        config: tokio_postgres::Config,
        table: &str,
    ) -> Result<Self, PostgreSQLSinkError> {
        let table = quote_table_name(table)?;
        let (client, connection) = config.connect(NoTls).await?;
        Self::from_parts(client, connection, table).await
    }

    /// Connect with a connection string such as `postgres://user@host/db`.
    pub async fn connect_url(url: &str, table: &str) -> Result<Self, PostgreSQLSinkError> {
        let table = quote_table_name(table)?;
        let (client, connection) = tokio_postgres::connect(url, NoTls).await?;
        Self::from_parts(client, connection, table).await
    }

    async fn from_parts<S, T>(
        client: Client,
        connection: tokio_postgres::Connection<S, T>,
        table: String,
    ) -> Result<Self, PostgreSQLSinkError>
    where
        S: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + 'static,
        T: tokio::io::AsyncRead + tokio::io::AsyncWrite + Unpin + Send + 'static,
    {
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error: {}", e);
            }
        });

        // Test the connection
        client.simple_query("SELECT 1").await?;

        // Preparing the insert also fails early when the table is missing
        let insert = client.prepare(&sql::insert_sql(&table)).await?;
        debug!("Prepared insert for {}", table);

        Ok(Self {
            client,
            table,
            insert,
        })
    }

    /// Quoted name of the destination table.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Underlying client, for ad hoc queries against the table.
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait::async_trait]
impl BronzeSink for PostgreSQLSink {
    async fn begin(&mut self) -> Result<()> {
        self.client
            .batch_execute("BEGIN")
            .await
            .context("Failed to begin transaction")
    }

    async fn truncate(&mut self) -> Result<()> {
        self.client
            .batch_execute(&sql::truncate_sql(&self.table))
            .await
            .with_context(|| format!("Failed to truncate {}", self.table))
    }

    async fn insert(&mut self, visit: &EdVisit) -> Result<()> {
        let acuity_level = visit.acuity_level.get();
        self.client
            .execute(
                &self.insert,
                &[
                    &visit.patient_id,
                    &visit.arrival_time,
                    &acuity_level,
                    &visit.age_group.as_str(),
                    &visit.chief_complaint.as_str(),
                    &visit.wait_time_minutes,
                    &visit.length_of_stay_hours,
                ],
            )
            .await
            .with_context(|| format!("Failed to insert visit {}", visit.patient_id))?;
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        self.client
            .batch_execute("COMMIT")
            .await
            .context("Failed to commit transaction")
    }

    async fn rollback(&mut self) -> Result<()> {
        self.client
            .batch_execute("ROLLBACK")
            .await
            .context("Failed to roll back transaction")
    }

    async fn row_count(&self) -> Result<u64> {
        let row = self
            .client
            .query_one(&sql::count_sql(&self.table), &[])
            .await
            .with_context(|| format!("Failed to count rows in {}", self.table))?;
        let count: i64 = row.try_get(0)?;
        Ok(count as u64)
    }

    async fn sample(&self, limit: u32) -> Result<Vec<EdVisit>> {
        let rows = self
            .client
            .query(&sql::sample_sql(&self.table), &[&i64::from(limit)])
            .await
            .with_context(|| format!("Failed to sample rows from {}", self.table))?;
        rows.iter()
            .map(|row| row_to_visit(row).map_err(anyhow::Error::from))
            .collect()
    }
}

fn row_to_visit(row: &Row) -> Result<EdVisit, PostgreSQLSinkError> {
    let acuity: i16 = row.try_get("acuity_level")?;
    let age_group: String = row.try_get("age_group")?;
    let chief_complaint: String = row.try_get("chief_complaint")?;
    let arrival_time: NaiveDateTime = row.try_get("arrival_time")?;
    let length_of_stay_hours: Decimal = row.try_get("length_of_stay_hours")?;

    Ok(EdVisit {
        patient_id: row.try_get("patient_id")?,
        arrival_time,
        acuity_level: AcuityLevel::new(i64::from(acuity))?,
        age_group: age_group.parse::<AgeGroup>()?,
        chief_complaint: chief_complaint.parse::<ChiefComplaint>()?,
        wait_time_minutes: row.try_get("wait_time_minutes")?,
        length_of_stay_hours,
    })
}
