//! Execution port
//!
//! The abstraction boundary to the underlying data store. The core never
//! inspects how an adapter translates a predicate into a native query; it
//! only requires that identical predicates filter identically across all
//! operations of one adapter.

use crate::errors::QueryError;
use crate::filter::Predicate;
use crate::plan::QueryPlan;
use async_trait::async_trait;

/// Capabilities required from a store adapter
#[async_trait]
pub trait ExecutionPort: Send + Sync {
    /// The row type this adapter materializes
    type Row: Send;

    /// Ordered, offset, limited rows for a windowed plan
    async fn fetch_page(&self, plan: &QueryPlan) -> Result<Vec<Self::Row>, QueryError>;

    /// Count of rows matching the predicate, ignoring ordering and
    /// pagination
    async fn fetch_count(&self, predicate: &Predicate) -> Result<u64, QueryError>;

    /// Unpaginated fetch; any window on the plan is ignored
    async fn fetch_all(&self, plan: &QueryPlan) -> Result<Vec<Self::Row>, QueryError>;

    /// Combined page-plus-count primitive, one port-level call.
    ///
    /// The default chains the page and count operations, so the store still
    /// computes a full count. Adapters with a native combined query may
    /// override it.
    async fn fetch_page_and_count(
        &self,
        plan: &QueryPlan,
    ) -> Result<(Vec<Self::Row>, u64), QueryError> {
        let content = self.fetch_page(plan).await?;
        let total = self.fetch_count(plan.predicate()).await?;
        Ok((content, total))
    }
}
