//! Error types for the Queryhaus crate
//!
//! This module contains all error types that can be returned by QueryHaus operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryHausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Searcher not found: {0}")]
    SearcherNotFound(String),

    #[error("Searcher already registered: {0}")]
    SearcherAlreadyRegistered(String),
}
