//! Pagination tactics
//!
//! Three ways to assemble a page plus its total. All of them return the same
//! `PageResult` for the same input; they differ only in the work performed
//! against the execution port, and the adaptive tactic skips the count query
//! whenever the page itself proves the total.

use crate::errors::QueryError;
use crate::page::PageResult;
use crate::plan::{PageWindow, QueryPlan};
use crate::port::ExecutionPort;

/// How a page and its total are obtained from the port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTactic {
    /// One combined page-plus-count call; the store still counts every row
    Eager,
    /// Independent page and count calls, run concurrently
    Split,
    /// Page first; count only when the total cannot be inferred
    #[default]
    Adaptive,
}

/// Dispatch to the selected tactic
pub async fn paginate<P: ExecutionPort>(
    port: &P,
    plan: &QueryPlan,
    tactic: PageTactic,
) -> Result<PageResult<P::Row>, QueryError> {
    match tactic {
        PageTactic::Eager => paginate_eager(port, plan).await,
        PageTactic::Split => paginate_split(port, plan).await,
        PageTactic::Adaptive => paginate_adaptive(port, plan).await,
    }
}

/// One combined port call returning content and total together.
pub async fn paginate_eager<P: ExecutionPort>(
    port: &P,
    plan: &QueryPlan,
) -> Result<PageResult<P::Row>, QueryError> {
    let Some(window) = plan.window().copied() else {
        return fetch_unpaginated(port, plan).await;
    };

    let (content, total) = port.fetch_page_and_count(plan).await?;
    Ok(PageResult::new(content, total, window))
}

/// Independent page and count calls.
///
/// The two calls are read-only and carry no ordering dependency, so they run
/// concurrently; both must complete before the page is assembled, and either
/// failure fails the whole operation.
pub async fn paginate_split<P: ExecutionPort>(
    port: &P,
    plan: &QueryPlan,
) -> Result<PageResult<P::Row>, QueryError> {
    let Some(window) = plan.window().copied() else {
        return fetch_unpaginated(port, plan).await;
    };

    let (content, total) =
        tokio::try_join!(port.fetch_page(plan), port.fetch_count(plan.predicate()))?;
    Ok(PageResult::new(content, total, window))
}

/// Page first; count only when the total cannot be inferred.
///
/// An underfilled page proves it is the last one, so the total is
/// `offset + fetched` and the count query never fires. An empty page at
/// offset zero proves a total of zero. An empty page past the first window
/// proves nothing about how many rows precede it, so the count query fires,
/// as it does for a full page. Dropping the returned future before the count
/// is dispatched cancels the operation without issuing it.
pub async fn paginate_adaptive<P: ExecutionPort>(
    port: &P,
    plan: &QueryPlan,
) -> Result<PageResult<P::Row>, QueryError> {
    let Some(window) = plan.window().copied() else {
        return fetch_unpaginated(port, plan).await;
    };

    let content = port.fetch_page(plan).await?;
    let fetched = content.len() as u64;

    let total = if fetched == 0 && window.offset() == 0 {
        tracing::debug!("[PAGINATE] empty first page, total inferred as 0");
        0
    } else if fetched > 0 && fetched < window.limit() {
        tracing::debug!(
            "[PAGINATE] last page detected ({} of {} requested), count query skipped",
            fetched,
            window.limit()
        );
        window.offset() + fetched
    } else {
        tracing::debug!("[PAGINATE] total not inferable from page, issuing count query");
        port.fetch_count(plan.predicate()).await?
    };

    Ok(PageResult::new(content, total, window))
}

/// Degradation for unwindowed plans: one full fetch, total equals content
/// length.
async fn fetch_unpaginated<P: ExecutionPort>(
    port: &P,
    plan: &QueryPlan,
) -> Result<PageResult<P::Row>, QueryError> {
    let content = port.fetch_all(plan).await?;
    let total = content.len() as u64;
    let window = PageWindow::first(total.max(1))?;
    Ok(PageResult::new(content, total, window))
}
