//! Field name validation
//!
//! Every field name that can reach a rendered query is checked here before
//! it is interpolated into SQL text.

use crate::errors::QueryError;

/// Validate that a field name is safe for SQL interpolation.
///
/// Accepts names matching `[a-zA-Z_][a-zA-Z0-9_.]*`, which covers plain
/// column names, qualified names (e.g., `members.age`), and underscored
/// identifiers.
pub fn validate_field_name(name: &str) -> Result<(), QueryError> {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => {
            return Err(QueryError::InvalidFieldName {
                name: name.to_string(),
            })
        }
    }

    for ch in chars {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '.' {
            return Err(QueryError::InvalidFieldName {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
