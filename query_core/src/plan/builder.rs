//! Query planning
//!
//! The immutable per-request query plan.

use crate::errors::QueryError;
use crate::filter::Predicate;
use crate::plan::{OrderSpec, PageWindow, Projection};
use crate::validation::validate_field_name;

/// One request's query: predicate, ordering, optional page window, and
/// projection. Built fresh per request and never mutated; rebuilding for a
/// new request always creates a new plan.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    predicate: Predicate,
    order: OrderSpec,
    window: Option<PageWindow>,
    projection: Projection,
}

impl QueryPlan {
    /// Validate and assemble a plan.
    ///
    /// Every field name reaching the plan (projection columns, predicate
    /// fields, sort fields) must be a safe identifier, and every sort field
    /// must be exposed by the projection. A plan without a window represents
    /// an unpaginated fetch.
    pub fn build(
        predicate: Predicate,
        order: OrderSpec,
        window: Option<PageWindow>,
        projection: Projection,
    ) -> Result<Self, QueryError> {
        for field in projection.fields() {
            validate_field_name(field)?;
        }
        for field in predicate.fields() {
            validate_field_name(field)?;
        }
        for key in order.keys() {
            validate_field_name(&key.field)?;
            if !projection.exposes(&key.field) {
                return Err(QueryError::UnknownSortField {
                    field: key.field.clone(),
                });
            }
        }

        Ok(Self {
            predicate,
            order,
            window,
            projection,
        })
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn order(&self) -> &OrderSpec {
        &self.order
    }

    pub fn window(&self) -> Option<&PageWindow> {
        self.window.as_ref()
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn is_paginated(&self) -> bool {
        self.window.is_some()
    }

    /// The same plan with pagination stripped, for count-side queries
    pub fn without_window(&self) -> QueryPlan {
        QueryPlan {
            predicate: self.predicate.clone(),
            order: self.order.clone(),
            window: None,
            projection: self.projection.clone(),
        }
    }
}
