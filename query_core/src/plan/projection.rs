//! Query planning
//!
//! The projection descriptor: the ordered set of columns a query exposes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    fields: Vec<String>,
}

impl Projection {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Whether the projection exposes the given field
    pub fn exposes(&self, field: &str) -> bool {
        self.fields.iter().any(|candidate| candidate == field)
    }
}
