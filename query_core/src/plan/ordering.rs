//! Query planning
//!
//! Ordering types: sort direction, null position, and the ordered key
//! sequence whose first entry is the primary sort.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Where null values sort, independent of direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NullOrder {
    First,
    Last,
}

impl NullOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            NullOrder::First => "NULLS FIRST",
            NullOrder::Last => "NULLS LAST",
        }
    }
}

/// One sort key: field, direction, and optional explicit null position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    pub order: SortOrder,
    pub nulls: Option<NullOrder>,
}

impl SortKey {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Asc,
            nulls: None,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            order: SortOrder::Desc,
            nulls: None,
        }
    }

    pub fn nulls(mut self, nulls: NullOrder) -> Self {
        self.nulls = Some(nulls);
        self
    }

    /// Effective null position. When unspecified this follows PostgreSQL:
    /// nulls last for ascending keys, nulls first for descending keys.
    /// Every adapter applies the same rule so ordering is consistent across
    /// stores.
    pub fn effective_nulls(&self) -> NullOrder {
        self.nulls.unwrap_or(match self.order {
            SortOrder::Asc => NullOrder::Last,
            SortOrder::Desc => NullOrder::First,
        })
    }
}

/// Ordered sequence of sort keys; the first key is the primary sort and
/// later keys break ties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    keys: Vec<SortKey>,
}

impl OrderSpec {
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn asc(self, field: &str) -> Self {
        self.key(SortKey::asc(field))
    }

    pub fn desc(self, field: &str) -> Self {
        self.key(SortKey::desc(field))
    }

    pub fn key(mut self, key: SortKey) -> Self {
        self.keys.push(key);
        self
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
