//! Query planning
//!
//! The requested page: an offset plus a positive limit, validated at
//! construction and immutable afterwards.

use crate::errors::QueryError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    offset: u64,
    limit: u64,
}

impl PageWindow {
    /// Create a window; a zero limit is rejected
    pub fn new(offset: u64, limit: u64) -> Result<Self, QueryError> {
        if limit == 0 {
            return Err(QueryError::InvalidPageWindow);
        }
        Ok(Self { offset, limit })
    }

    /// The first page with the given limit
    pub fn first(limit: u64) -> Result<Self, QueryError> {
        Self::new(0, limit)
    }

    /// A specific page number (1-indexed); page 0 is treated as page 1
    pub fn page(number: u64, size: u64) -> Result<Self, QueryError> {
        let offset = number.saturating_sub(1).saturating_mul(size);
        Self::new(offset, size)
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}
