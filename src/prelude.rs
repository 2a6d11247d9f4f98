//! Convenience re-exports for common Queryhaus usage
//!
//! This prelude module re-exports the most commonly used items from the
//! Queryhaus workspace, making it easier to import everything you need with
//! a single use statement.
//!
//! # Example
//!
//! ```rust
//! use queryhaus::prelude::*;
//!
//! // Now you have access to all the common Queryhaus types and traits
//! ```

// Core Queryhaus components
pub use crate::core::QueryHaus;
pub use crate::errors::QueryHausError;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, QueryConfig};

// Re-export commonly used query-core types for convenience
pub use query_core::prelude::*;

// Re-export query_core module itself
pub use query_core;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;
