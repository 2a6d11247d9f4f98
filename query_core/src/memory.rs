//! In-memory execution port
//!
//! A store adapter over plain JSON rows. It evaluates predicates, sorts with
//! the same null-position semantics the PostgreSQL adapter renders, windows,
//! and projects. Every operation is counted so tests can assert whether a
//! count query fired, not merely that totals came out right.

use crate::errors::QueryError;
use crate::filter::predicate::compare_values;
use crate::filter::Predicate;
use crate::plan::{NullOrder, OrderSpec, Projection, QueryPlan, SortOrder};
use crate::port::ExecutionPort;
use async_trait::async_trait;
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

pub struct MemoryPort {
    rows: Vec<Value>,
    page_calls: AtomicUsize,
    count_calls: AtomicUsize,
    all_calls: AtomicUsize,
}

impl MemoryPort {
    /// Build a port over JSON object rows
    pub fn new(rows: Vec<Value>) -> Self {
        Self {
            rows,
            page_calls: AtomicUsize::new(0),
            count_calls: AtomicUsize::new(0),
            all_calls: AtomicUsize::new(0),
        }
    }

    pub fn page_calls(&self) -> usize {
        self.page_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn count_calls(&self) -> usize {
        self.count_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn all_calls(&self) -> usize {
        self.all_calls.load(AtomicOrdering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.page_calls.store(0, AtomicOrdering::SeqCst);
        self.count_calls.store(0, AtomicOrdering::SeqCst);
        self.all_calls.store(0, AtomicOrdering::SeqCst);
    }

    fn matches(predicate: &Predicate, row: &Value) -> bool {
        match predicate {
            Predicate::All => true,
            Predicate::Equals { field, value } => row.get(field) == Some(value),
            Predicate::Range {
                field,
                lower,
                upper,
            } => {
                let actual = match row.get(field) {
                    Some(actual) if !actual.is_null() => actual,
                    // A null or missing value never satisfies a bound
                    _ => return false,
                };
                if let Some(lo) = lower {
                    match compare_values(actual, lo) {
                        Some(Ordering::Less) | None => return false,
                        _ => {}
                    }
                }
                if let Some(hi) = upper {
                    match compare_values(actual, hi) {
                        Some(Ordering::Greater) | None => return false,
                        _ => {}
                    }
                }
                true
            }
            Predicate::And(children) => children.iter().all(|child| Self::matches(child, row)),
        }
    }

    fn matching(&self, predicate: &Predicate) -> Vec<Value> {
        self.rows
            .iter()
            .filter(|row| Self::matches(predicate, row))
            .cloned()
            .collect()
    }

    fn sort(rows: &mut [Value], order: &OrderSpec) {
        rows.sort_by(|a, b| {
            for key in order.keys() {
                let left = a.get(&key.field).unwrap_or(&Value::Null);
                let right = b.get(&key.field).unwrap_or(&Value::Null);

                let ordering = match (left.is_null(), right.is_null()) {
                    (true, true) => Ordering::Equal,
                    // Null position is absolute, independent of direction
                    (true, false) => match key.effective_nulls() {
                        NullOrder::First => Ordering::Less,
                        NullOrder::Last => Ordering::Greater,
                    },
                    (false, true) => match key.effective_nulls() {
                        NullOrder::First => Ordering::Greater,
                        NullOrder::Last => Ordering::Less,
                    },
                    (false, false) => {
                        let base = compare_values(left, right).unwrap_or(Ordering::Equal);
                        match key.order {
                            SortOrder::Asc => base,
                            SortOrder::Desc => base.reverse(),
                        }
                    }
                };

                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            Ordering::Equal
        });
    }

    fn project(row: &Value, projection: &Projection) -> Value {
        let mut out = serde_json::Map::new();
        for field in projection.fields() {
            out.insert(
                field.clone(),
                row.get(field).cloned().unwrap_or(Value::Null),
            );
        }
        Value::Object(out)
    }
}

#[async_trait]
impl ExecutionPort for MemoryPort {
    type Row = Value;

    async fn fetch_page(&self, plan: &QueryPlan) -> Result<Vec<Value>, QueryError> {
        self.page_calls.fetch_add(1, AtomicOrdering::SeqCst);

        let mut rows = self.matching(plan.predicate());
        Self::sort(&mut rows, plan.order());

        let rows: Vec<Value> = match plan.window() {
            Some(window) => rows
                .into_iter()
                .skip(window.offset() as usize)
                .take(window.limit() as usize)
                .collect(),
            None => rows,
        };

        Ok(rows
            .iter()
            .map(|row| Self::project(row, plan.projection()))
            .collect())
    }

    async fn fetch_count(&self, predicate: &Predicate) -> Result<u64, QueryError> {
        self.count_calls.fetch_add(1, AtomicOrdering::SeqCst);

        Ok(self
            .rows
            .iter()
            .filter(|row| Self::matches(predicate, row))
            .count() as u64)
    }

    async fn fetch_all(&self, plan: &QueryPlan) -> Result<Vec<Value>, QueryError> {
        self.all_calls.fetch_add(1, AtomicOrdering::SeqCst);

        let mut rows = self.matching(plan.predicate());
        Self::sort(&mut rows, plan.order());

        Ok(rows
            .iter()
            .map(|row| Self::project(row, plan.projection()))
            .collect())
    }
}
