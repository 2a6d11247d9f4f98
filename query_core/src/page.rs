//! Page results
//!
//! The value object handed back to callers: one page of content plus the
//! total matching row count and the window that produced it.

use crate::plan::PageWindow;
use serde::Serialize;

/// One page of results.
///
/// Invariants: `total >= offset + content.len()` whenever content is
/// non-empty, and when `content.len() < limit` the total is exactly
/// `offset + content.len()` (no further rows exist).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageResult<T> {
    content: Vec<T>,
    total: u64,
    window: PageWindow,
}

impl<T> PageResult<T> {
    pub fn new(content: Vec<T>, total: u64, window: PageWindow) -> Self {
        Self {
            content,
            total,
            window,
        }
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of pages needed to cover the total at this window's limit
    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.window.limit())
    }

    pub fn is_last_page(&self) -> bool {
        self.window.offset() + self.content.len() as u64 >= self.total
    }

    pub fn has_next(&self) -> bool {
        !self.is_last_page()
    }
}
