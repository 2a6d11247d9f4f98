//! Query planning
//!
//! This module provides the ordering, windowing, and projection types and
//! the immutable per-request query plan that bundles them.

pub mod builder;
pub mod ordering;
pub mod projection;
pub mod window;


pub use builder::QueryPlan;
pub use ordering::{NullOrder, OrderSpec, SortKey, SortOrder};
pub use projection::Projection;
pub use window::PageWindow;
