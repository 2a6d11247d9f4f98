//! Convenience re-exports for common query-core usage

// Error types
pub use crate::errors::QueryError;

// Filter composition
pub use crate::filter::{FilterSpec, Predicate};

// Query planning
pub use crate::plan::{NullOrder, OrderSpec, PageWindow, Projection, QueryPlan, SortKey, SortOrder};

// Page results
pub use crate::page::PageResult;

// Execution port boundary and the bundled adapters
pub use crate::memory::MemoryPort;
pub use crate::port::ExecutionPort;
pub use crate::postgres::PgExecutionPort;

// Pagination tactics
pub use crate::strategy::{paginate, PageTactic};

// The library-level API
pub use crate::search::Searcher;

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
