//! Filter composition
//!
//! Unit tests for predicate construction and filter composition.

use crate::errors::QueryError;
use crate::filter::{FilterSpec, Predicate};
use serde_json::json;

// ========================================
// Predicate construction
// ========================================

#[test]
fn test_and_of_nothing_is_identity() {
    assert_eq!(Predicate::and(vec![]), Predicate::All);
}

#[test]
fn test_and_drops_identity_elements() {
    let predicate = Predicate::and(vec![
        Predicate::All,
        Predicate::eq("username", json!("member1")),
        Predicate::All,
    ]);

    // A single surviving leaf is returned unwrapped
    assert_eq!(predicate, Predicate::eq("username", json!("member1")));
}

#[test]
fn test_and_flattens_nested_conjunctions() {
    let inner = Predicate::And(vec![
        Predicate::eq("team_name", json!("teamA")),
        Predicate::range("age", Some(json!(20)), None),
    ]);
    let predicate = Predicate::and(vec![inner, Predicate::eq("username", json!("member1"))]);

    assert_eq!(predicate.leaf_count(), 3);
    assert!(matches!(predicate, Predicate::And(ref children) if children.len() == 3));
}

#[test]
fn test_range_with_no_bounds_is_identity() {
    let predicate = Predicate::range("age", None, None);
    assert!(predicate.is_all());
    assert_eq!(predicate.leaf_count(), 0);
}

#[test]
fn test_fields_lists_every_referenced_field() {
    let predicate = Predicate::and(vec![
        Predicate::eq("username", json!("member1")),
        Predicate::range("age", Some(json!(20)), Some(json!(40))),
    ]);

    assert_eq!(predicate.fields(), vec!["username", "age"]);
}

// ========================================
// FilterSpec composition
// ========================================

#[test]
fn test_empty_spec_composes_to_match_all() {
    let spec = FilterSpec::new();
    let predicate = spec.compose().unwrap();

    assert!(predicate.is_all());
    assert_eq!(predicate.leaf_count(), 0);
}

#[test]
fn test_all_absent_fields_compose_to_match_all() {
    let spec = FilterSpec::new()
        .text_eq("username", None)
        .text_eq("team_name", None)
        .range("age", None::<i64>, None::<i64>);

    assert!(spec.is_empty());
    assert!(spec.compose().unwrap().is_all());
}

#[test]
fn test_blank_text_is_absent() {
    let spec = FilterSpec::new()
        .text_eq("username", Some("   "))
        .text_eq("team_name", Some(""));

    assert_eq!(spec.present_count(), 0);
    assert!(spec.compose().unwrap().is_all());
}

#[test]
fn test_text_values_are_trimmed() {
    let spec = FilterSpec::new().text_eq("username", Some("  member1  "));
    let predicate = spec.compose().unwrap();

    assert_eq!(predicate, Predicate::eq("username", json!("member1")));
}

#[test]
fn test_leaf_count_matches_present_count() {
    let spec = FilterSpec::new()
        .text_eq("username", Some("member1"))
        .text_eq("team_name", None)
        .range("age", Some(20), None::<i64>);

    assert_eq!(spec.present_count(), 2);
    assert_eq!(spec.compose().unwrap().leaf_count(), 2);

    let full = FilterSpec::new()
        .text_eq("username", Some("member1"))
        .text_eq("team_name", Some("teamA"))
        .range("age", Some(20), Some(40));

    assert_eq!(full.present_count(), 3);
    assert_eq!(full.compose().unwrap().leaf_count(), 3);
}

#[test]
fn test_eq_and_eq_opt_fields() {
    let spec = FilterSpec::new()
        .eq("team_id", 1)
        .eq_opt("age", Some(30))
        .eq_opt("member_id", None::<i64>);

    assert_eq!(spec.present_count(), 2);
    let predicate = spec.compose().unwrap();
    assert_eq!(predicate.fields(), vec!["team_id", "age"]);
}

#[test]
fn test_compose_is_deterministic() {
    let spec = FilterSpec::new()
        .text_eq("team_name", Some("teamB"))
        .range("age", Some(35), Some(40));

    let first = spec.compose().unwrap();
    let second = spec.compose().unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_compose_preserves_registration_order() {
    let spec = FilterSpec::new()
        .range("age", Some(35), Some(40))
        .text_eq("team_name", Some("teamB"));

    let predicate = spec.compose().unwrap();
    assert_eq!(predicate.fields(), vec!["age", "team_name"]);
}

#[test]
fn test_single_bound_ranges() {
    let lower_only = FilterSpec::new()
        .range("age", Some(18), None::<i64>)
        .compose()
        .unwrap();
    assert_eq!(
        lower_only,
        Predicate::Range {
            field: "age".to_string(),
            lower: Some(json!(18)),
            upper: None,
        }
    );

    let upper_only = FilterSpec::new()
        .range("age", None::<i64>, Some(65))
        .compose()
        .unwrap();
    assert_eq!(
        upper_only,
        Predicate::Range {
            field: "age".to_string(),
            lower: None,
            upper: Some(json!(65)),
        }
    );
}

// ========================================
// Range validation
// ========================================

#[test]
fn test_inverted_range_is_rejected() {
    let spec = FilterSpec::new().range("age", Some(40), Some(20));
    let result = spec.compose();

    match result {
        Err(QueryError::InvalidFilterRange { field, .. }) => assert_eq!(field, "age"),
        other => panic!("expected InvalidFilterRange, got {:?}", other),
    }
}

#[test]
fn test_equal_bounds_are_accepted() {
    let spec = FilterSpec::new().range("age", Some(30), Some(30));
    assert!(spec.compose().is_ok());
}

#[test]
fn test_ordered_bounds_are_accepted() {
    let spec = FilterSpec::new().range("age", Some(20), Some(40));
    assert!(spec.compose().is_ok());
}

#[test]
fn test_incomparable_bounds_are_not_rejected() {
    // Mixed-type bounds cannot prove a violation; the adapter decides
    let spec = FilterSpec::new().range("age", Some(json!("20")), Some(json!(10)));
    assert!(spec.compose().is_ok());
}

#[test]
fn test_inverted_string_range_is_rejected() {
    let spec = FilterSpec::new().range("username", Some(json!("zeta")), Some(json!("alpha")));
    assert!(matches!(
        spec.compose(),
        Err(QueryError::InvalidFilterRange { .. })
    ));
}

#[test]
fn test_caller_fault_classification() {
    let err = FilterSpec::new()
        .range("age", Some(40), Some(20))
        .compose()
        .unwrap_err();
    assert!(err.is_caller_fault());

    let execution = QueryError::execution("fetch_page", "connection reset");
    assert!(!execution.is_caller_fault());
}
