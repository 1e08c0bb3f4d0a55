//! Chart repository trait.
//!
//! Defines the interface for chart persistence operations.

use super::model::{Chart, NewChart};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for managing chart persistence.
///
/// This trait defines the contract for persisting and retrieving chart
/// records, decoupling the application's core logic from the specific
/// storage mechanism (e.g., a Supabase-style REST service, or an in-memory
/// fake in tests).
///
/// There is deliberately no update operation: charts are create-only.
#[async_trait]
pub trait ChartRepository: Send + Sync {
    /// Lists all charts belonging to the given owner, newest first.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Chart>)`: the owner's charts, ordered by creation time
    ///   descending; empty when the owner has none
    /// - `Err(_)`: transport or service failure, propagated to the caller
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Chart>>;

    /// Finds a chart by its id.
    ///
    /// No client-side ownership filter is applied; row visibility is the
    /// remote service's responsibility.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Chart))`: chart found
    /// - `Ok(None)`: no chart with that id
    /// - `Err(_)`: transport or service failure
    async fn find_by_id(&self, chart_id: &str) -> Result<Option<Chart>>;

    /// Inserts a new chart and returns the stored record.
    ///
    /// The returned chart carries the server-assigned id.
    async fn insert(&self, chart: &NewChart) -> Result<Chart>;

    /// Deletes a chart by id.
    ///
    /// Idempotent from the caller's perspective: deleting an id that does
    /// not exist resolves `Ok(())`.
    async fn delete(&self, chart_id: &str) -> Result<()>;
}
