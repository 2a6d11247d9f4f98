//! Query Core - Conditional query composition and adaptive pagination
//!
//! This crate provides the foundational types for building queries from
//! sparse filter input and paginating their results, including the predicate
//! tree, the query plan, the pagination tactics, and the execution port
//! boundary that store adapters implement.

pub mod errors;
pub mod filter;
pub mod memory;
pub mod page;
pub mod plan;
pub mod port;
pub mod postgres;
pub mod prelude;
pub mod search;
pub mod sql;
pub mod strategy;
pub mod validation;

pub use errors::QueryError;
pub use filter::{FilterSpec, Predicate};
pub use memory::MemoryPort;
pub use page::PageResult;
pub use plan::{NullOrder, OrderSpec, PageWindow, Projection, QueryPlan, SortKey, SortOrder};
pub use port::ExecutionPort;
pub use postgres::PgExecutionPort;
pub use search::Searcher;
pub use strategy::{paginate, paginate_adaptive, paginate_eager, paginate_split, PageTactic};

use sqlx::PgPool;

pub type DbPool = PgPool;
