//! # Queryhaus
//!
//! A conditional query composition and adaptive pagination library for
//! PostgreSQL-backed entity stores.
//!
//! Callers describe a search with a sparse set of optional filter fields;
//! queryhaus composes the present fields into a single predicate (absent
//! fields are omitted entirely, never encoded as always-true clauses),
//! plans the query, and paginates its results — skipping the total-count
//! query whenever the fetched page already proves the total.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use queryhaus::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rows = vec![
//!         json!({"member_id": 1, "username": "member1", "age": 31, "team_name": "teamA"}),
//!         json!({"member_id": 2, "username": "member2", "age": 32, "team_name": "teamB"}),
//!     ];
//!     let searcher = Searcher::new(
//!         MemoryPort::new(rows),
//!         Projection::new(["member_id", "username", "age", "team_name"]),
//!     );
//!
//!     let filter = FilterSpec::new()
//!         .text_eq("team_name", Some("teamB"))
//!         .range("age", Some(30), Some(40));
//!     let order = OrderSpec::new().desc("age");
//!
//!     let page = searcher
//!         .search_page_adaptive(&filter, &order, PageWindow::first(10)?)
//!         .await?;
//!     println!("{} of {} members", page.len(), page.total());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::QueryHaus;
pub use errors::QueryHausError;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, QueryConfig};

// Re-export the core crate used by the public API
pub use query_core;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
