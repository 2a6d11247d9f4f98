//! Core QueryHaus functionality
//!
//! This module contains the main QueryHaus struct and its implementation,
//! providing centralized coordination for the database connection and the
//! searchers built on top of it.

use sqlx::PgPool;
use std::collections::HashMap;
use std::time::Duration;

use crate::errors::QueryHausError;
use config::{AppConfig, QueryConfig};

/// Main QueryHaus coordinator that manages the database connection and the
/// registered searchers
pub struct QueryHaus {
    pool: PgPool,
    query_config: QueryConfig,
    searchers: HashMap<String, Box<dyn std::any::Any + Send + Sync>>,
}

impl QueryHaus {
    /// Create new QueryHaus with database connection
    pub async fn new(config: AppConfig) -> Result<Self, QueryHausError> {
        let connection_string = config.database.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .min_connections(config.database.min_connections)
            .idle_timeout(Duration::from_secs(config.database.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.database.max_lifetime_seconds > 0 {
            pool_options = pool_options
                .max_lifetime(Duration::from_secs(config.database.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self {
            pool,
            query_config: config.query,
            searchers: HashMap::new(),
        })
    }

    /// Build a QueryHaus over an existing pool with default query settings
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            pool,
            query_config: QueryConfig::default(),
            searchers: HashMap::new(),
        }
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The configured per-statement timeout, for wiring into port adapters
    pub fn statement_timeout(&self) -> Duration {
        Duration::from_secs(self.query_config.statement_timeout_seconds)
    }

    /// The configured default page size
    pub fn default_page_size(&self) -> u64 {
        self.query_config.default_page_size
    }

    /// Register a searcher with a given name
    pub fn register_searcher<T>(&mut self, name: String, searcher: T) -> Result<(), QueryHausError>
    where
        T: Send + Sync + 'static,
    {
        if self.searchers.contains_key(&name) {
            return Err(QueryHausError::SearcherAlreadyRegistered(name));
        }

        crate::debug_log!("[REGISTER] searcher '{}'", name);
        self.searchers.insert(name, Box::new(searcher));
        Ok(())
    }

    /// Get a registered searcher by name
    pub fn get_searcher<T>(&self, name: &str) -> Result<&T, QueryHausError>
    where
        T: Send + Sync + 'static,
    {
        self.searchers
            .get(name)
            .and_then(|searcher| searcher.downcast_ref::<T>())
            .ok_or_else(|| QueryHausError::SearcherNotFound(name.to_string()))
    }

    /// List all registered searcher names
    pub fn list_searchers(&self) -> Vec<&String> {
        self.searchers.keys().collect()
    }

    /// Remove a searcher by name
    pub fn unregister_searcher(&mut self, name: &str) -> Result<(), QueryHausError> {
        self.searchers
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| QueryHausError::SearcherNotFound(name.to_string()))
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), QueryHausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
