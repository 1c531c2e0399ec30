//! BronzeSink trait definition.

use anyhow::Result;
use ed_core::EdVisit;

/// Trait for writing visits into the bronze table.
///
/// Writes made between [`begin`](BronzeSink::begin) and
/// [`commit`](BronzeSink::commit) become visible together;
/// [`rollback`](BronzeSink::rollback) discards them, including a truncate.
///
/// # Usage Pattern
///
/// The load procedure is generic over the sink:
///
/// ```ignore
/// pub async fn load_visits<S: BronzeSink>(sink: &mut S, visits: &[EdVisit]) -> Result<()> {
///     sink.begin().await?;
///     sink.truncate().await?;
///     for visit in visits {
///         sink.insert(visit).await?;
///     }
///     sink.commit().await
/// }
/// ```
#[async_trait::async_trait]
pub trait BronzeSink: Send + Sync {
    /// Start a transaction.
    async fn begin(&mut self) -> Result<()>;

    /// Remove every row from the bronze table.
    async fn truncate(&mut self) -> Result<()>;

    /// Insert one visit, binding all seven columns positionally.
    async fn insert(&mut self, visit: &EdVisit) -> Result<()>;

    /// Commit the open transaction.
    async fn commit(&mut self) -> Result<()>;

    /// Discard the open transaction.
    async fn rollback(&mut self) -> Result<()>;

    /// Count committed rows.
    async fn row_count(&self) -> Result<u64>;

    /// Fetch up to `limit` committed rows.
    async fn sample(&self, limit: u32) -> Result<Vec<EdVisit>>;
}
