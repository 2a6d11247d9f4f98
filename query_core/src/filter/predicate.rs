//! Filter composition
//!
//! This module provides the predicate tree interpreted by execution port
//! adapters.

use serde_json::Value;
use std::cmp::Ordering;

/// Immutable boolean filter expression.
///
/// `All` is the identity element: it matches every row and is collapsed away
/// by [`Predicate::and`], so a composed tree contains only meaningful
/// comparisons.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Matches every row (identity element)
    All,
    /// Exact match on a single field
    Equals { field: String, value: Value },
    /// Bounded comparison; either bound may be absent independently
    Range {
        field: String,
        lower: Option<Value>,
        upper: Option<Value>,
    },
    /// Conjunction of child predicates
    And(Vec<Predicate>),
}

impl Predicate {
    /// Exact-match leaf
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::Equals {
            field: field.to_string(),
            value: value.into(),
        }
    }

    /// Range leaf; collapses to the identity when both bounds are absent
    pub fn range(field: &str, lower: Option<Value>, upper: Option<Value>) -> Self {
        if lower.is_none() && upper.is_none() {
            return Self::All;
        }
        Self::Range {
            field: field.to_string(),
            lower,
            upper,
        }
    }

    /// Conjunction. Identity elements are dropped, nested conjunctions are
    /// flattened, and a single surviving child is returned unwrapped.
    pub fn and(predicates: Vec<Predicate>) -> Self {
        let mut flat = Vec::new();
        for predicate in predicates {
            match predicate {
                Predicate::All => {}
                Predicate::And(children) => flat.extend(children),
                leaf => flat.push(leaf),
            }
        }

        if flat.is_empty() {
            Predicate::All
        } else if flat.len() == 1 {
            flat.remove(0)
        } else {
            Predicate::And(flat)
        }
    }

    /// Whether this predicate matches every row
    pub fn is_all(&self) -> bool {
        matches!(self, Predicate::All)
    }

    /// Number of comparison leaves in the tree
    pub fn leaf_count(&self) -> usize {
        match self {
            Predicate::All => 0,
            Predicate::Equals { .. } | Predicate::Range { .. } => 1,
            Predicate::And(children) => children.iter().map(Predicate::leaf_count).sum(),
        }
    }

    /// Every field name referenced by the tree
    pub fn fields(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_fields(&mut out);
        out
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Predicate::All => {}
            Predicate::Equals { field, .. } | Predicate::Range { field, .. } => {
                out.push(field.as_str())
            }
            Predicate::And(children) => {
                for child in children {
                    child.collect_fields(out);
                }
            }
        }
    }
}

/// Ordering over the JSON value types that can appear in comparisons.
///
/// Numbers compare numerically, strings lexicographically, booleans
/// false-before-true. Mixed-type pairs and nulls are incomparable.
pub(crate) fn compare_values(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(xi), Some(yi)) = (x.as_i64(), y.as_i64()) {
                Some(xi.cmp(&yi))
            } else {
                match (x.as_f64(), y.as_f64()) {
                    (Some(xf), Some(yf)) => xf.partial_cmp(&yf),
                    _ => None,
                }
            }
        }
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}
