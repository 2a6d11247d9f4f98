//! Searcher
//!
//! The library-level search API. Each call composes the caller's sparse
//! filter into a predicate, builds a fresh plan against the searcher's
//! projection, and dispatches to the execution port. The port is injected at
//! construction; there is no process-wide session state.

use crate::errors::QueryError;
use crate::filter::FilterSpec;
use crate::page::PageResult;
use crate::plan::{OrderSpec, PageWindow, Projection, QueryPlan};
use crate::port::ExecutionPort;
use crate::strategy;

pub struct Searcher<P> {
    port: P,
    projection: Projection,
}

impl<P: ExecutionPort> Searcher<P> {
    pub fn new(port: P, projection: Projection) -> Self {
        Self { port, projection }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    fn plan(
        &self,
        filter: &FilterSpec,
        order: &OrderSpec,
        window: Option<PageWindow>,
    ) -> Result<QueryPlan, QueryError> {
        let predicate = filter.compose()?;
        QueryPlan::build(predicate, order.clone(), window, self.projection.clone())
    }

    /// Unpaginated search; the caller accepts an unbounded result size
    pub async fn search(
        &self,
        filter: &FilterSpec,
        order: &OrderSpec,
    ) -> Result<Vec<P::Row>, QueryError> {
        let plan = self.plan(filter, order, None)?;
        self.port.fetch_all(&plan).await
    }

    /// Paginated search using the combined page-plus-count primitive
    pub async fn search_page(
        &self,
        filter: &FilterSpec,
        order: &OrderSpec,
        window: PageWindow,
    ) -> Result<PageResult<P::Row>, QueryError> {
        let plan = self.plan(filter, order, Some(window))?;
        strategy::paginate_eager(&self.port, &plan).await
    }

    /// Paginated search with independent, concurrent page and count calls
    pub async fn search_page_split(
        &self,
        filter: &FilterSpec,
        order: &OrderSpec,
        window: PageWindow,
    ) -> Result<PageResult<P::Row>, QueryError> {
        let plan = self.plan(filter, order, Some(window))?;
        strategy::paginate_split(&self.port, &plan).await
    }

    /// Paginated search that skips the count query whenever the fetched page
    /// already proves the total
    pub async fn search_page_adaptive(
        &self,
        filter: &FilterSpec,
        order: &OrderSpec,
        window: PageWindow,
    ) -> Result<PageResult<P::Row>, QueryError> {
        let plan = self.plan(filter, order, Some(window))?;
        strategy::paginate_adaptive(&self.port, &plan).await
    }
}
