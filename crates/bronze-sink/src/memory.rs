//! In-memory bronze sink.

use crate::traits::BronzeSink;
use anyhow::{bail, Result};
use ed_core::EdVisit;
use tracing::debug;

/// A bronze table held in memory with single-transaction semantics.
///
/// Outside a transaction every write is applied immediately. Inside one,
/// writes go to a staged copy that replaces the committed rows on commit and
/// is dropped on rollback.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    committed: Vec<EdVisit>,
    staged: Option<Vec<EdVisit>>,
    /// 1-based insert call that fails, for exercising rollback
    fail_on_insert: Option<u64>,
    insert_calls: u64,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with rows already committed, as if left by an earlier load.
    pub fn with_rows(rows: Vec<EdVisit>) -> Self {
        Self {
            committed: rows,
            ..Self::default()
        }
    }

    /// Make the `n`-th insert call (1-based, counted over the sink's life) fail.
    pub fn fail_on_insert(mut self, n: u64) -> Self {
        self.fail_on_insert = Some(n);
        self
    }

    /// Committed rows in insertion order.
    pub fn rows(&self) -> &[EdVisit] {
        &self.committed
    }

    pub fn in_transaction(&self) -> bool {
        self.staged.is_some()
    }

    fn target(&mut self) -> &mut Vec<EdVisit> {
        match self.staged {
            Some(ref mut staged) => staged,
            None => &mut self.committed,
        }
    }
}

#[async_trait::async_trait]
impl BronzeSink for MemorySink {
    async fn begin(&mut self) -> Result<()> {
        if self.staged.is_some() {
            bail!("transaction already in progress");
        }
        self.staged = Some(self.committed.clone());
        Ok(())
    }

    async fn truncate(&mut self) -> Result<()> {
        self.target().clear();
        Ok(())
    }

    async fn insert(&mut self, visit: &EdVisit) -> Result<()> {
        self.insert_calls += 1;
        if self.fail_on_insert == Some(self.insert_calls) {
            bail!(
                "simulated insert failure on call {} ({})",
                self.insert_calls,
                visit.patient_id
            );
        }
        self.target().push(visit.clone());
        Ok(())
    }

    async fn commit(&mut self) -> Result<()> {
        match self.staged.take() {
            Some(staged) => {
                debug!("Committing {} rows", staged.len());
                self.committed = staged;
                Ok(())
            }
            None => bail!("no transaction in progress"),
        }
    }

    async fn rollback(&mut self) -> Result<()> {
        if let Some(staged) = self.staged.take() {
            debug!("Rolled back {} staged rows", staged.len());
        }
        Ok(())
    }

    async fn row_count(&self) -> Result<u64> {
        Ok(self.committed.len() as u64)
    }

    async fn sample(&self, limit: u32) -> Result<Vec<EdVisit>> {
        Ok(self
            .committed
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }
}
