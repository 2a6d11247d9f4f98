//! Filter composition
//!
//! This module provides the sparse filter builder.

use crate::errors::QueryError;
use crate::filter::predicate::{compare_values, Predicate};
use serde_json::Value;
use std::cmp::Ordering;

/// Sparse set of named optional filter fields.
///
/// Fields are registered in builder order and composed in that same order,
/// so identical specs always produce structurally identical predicates.
/// Absent fields contribute nothing to the composed tree.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    fields: Vec<FieldFilter>,
}

#[derive(Debug, Clone)]
struct FieldFilter {
    field: String,
    kind: FilterKind,
}

#[derive(Debug, Clone)]
enum FilterKind {
    Eq(Option<Value>),
    Range {
        lower: Option<Value>,
        upper: Option<Value>,
    },
}

impl FilterKind {
    fn is_present(&self) -> bool {
        match self {
            FilterKind::Eq(value) => value.is_some(),
            FilterKind::Range { lower, upper } => lower.is_some() || upper.is_some(),
        }
    }
}

impl FilterSpec {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Exact-match field, always present
    pub fn eq(self, field: &str, value: impl Into<Value>) -> Self {
        self.push(field, FilterKind::Eq(Some(value.into())))
    }

    /// Exact-match field, present only when `value` is `Some`
    pub fn eq_opt(self, field: &str, value: Option<impl Into<Value>>) -> Self {
        self.push(field, FilterKind::Eq(value.map(Into::into)))
    }

    /// Text-equality field; `None` and whitespace-only strings are absent
    pub fn text_eq(self, field: &str, value: Option<&str>) -> Self {
        let value = value
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(|text| Value::String(text.to_string()));
        self.push(field, FilterKind::Eq(value))
    }

    /// Range field; each bound is present independently
    pub fn range(
        self,
        field: &str,
        lower: Option<impl Into<Value>>,
        upper: Option<impl Into<Value>>,
    ) -> Self {
        self.push(
            field,
            FilterKind::Range {
                lower: lower.map(Into::into),
                upper: upper.map(Into::into),
            },
        )
    }

    fn push(mut self, field: &str, kind: FilterKind) -> Self {
        self.fields.push(FieldFilter {
            field: field.to_string(),
            kind,
        });
        self
    }

    /// Number of fields that are actually present
    pub fn present_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|entry| entry.kind.is_present())
            .count()
    }

    /// Whether no field is present (composes to match-all)
    pub fn is_empty(&self) -> bool {
        self.present_count() == 0
    }

    /// Compose the present fields into a single predicate.
    ///
    /// Fields are evaluated in registration order. Zero present fields yield
    /// the identity predicate (match-all), never a match-nothing clause. A
    /// range whose lower bound exceeds its upper bound fails fast with
    /// [`QueryError::InvalidFilterRange`] instead of silently returning an
    /// empty result set.
    pub fn compose(&self) -> Result<Predicate, QueryError> {
        let mut leaves = Vec::new();

        for entry in &self.fields {
            match &entry.kind {
                FilterKind::Eq(None) => {}
                FilterKind::Eq(Some(value)) => {
                    leaves.push(Predicate::eq(&entry.field, value.clone()));
                }
                FilterKind::Range {
                    lower: None,
                    upper: None,
                } => {}
                FilterKind::Range { lower, upper } => {
                    if let (Some(lo), Some(hi)) = (lower, upper) {
                        if compare_values(lo, hi) == Some(Ordering::Greater) {
                            return Err(QueryError::InvalidFilterRange {
                                field: entry.field.clone(),
                                lower: lo.clone(),
                                upper: hi.clone(),
                            });
                        }
                    }
                    leaves.push(Predicate::Range {
                        field: entry.field.clone(),
                        lower: lower.clone(),
                        upper: upper.clone(),
                    });
                }
            }
        }

        Ok(Predicate::and(leaves))
    }
}
