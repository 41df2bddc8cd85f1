//! Tests for the data model
//!
//! These tests verify:
//! - Scalar comparison within and across kinds
//! - Lexicographic key ordering
//! - Incomparable keys (arity and kind mismatches)
//! - Primary key extraction and key shape validation

use std::cmp::Ordering;

use docstore::model::{Document, Key, KeySchema, ScalarKind, Value};
use docstore::{doc, key, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

fn schema(columns: &[&str]) -> KeySchema {
    KeySchema::new(columns.iter().map(|c| c.to_string()).collect(), None)
}

// =============================================================================
// Value Tests
// =============================================================================

#[test]
fn test_value_kinds() {
    assert_eq!(Value::from(true).kind(), ScalarKind::Bool);
    assert_eq!(Value::from(7).kind(), ScalarKind::Int);
    assert_eq!(Value::from(7i64).kind(), ScalarKind::Int);
    assert_eq!(Value::from(1.5).kind(), ScalarKind::Float);
    assert_eq!(Value::from("x").kind(), ScalarKind::Text);
    assert_eq!(Value::from(String::from("x")).kind(), ScalarKind::Text);
}

#[test]
fn test_value_compare_same_kind() {
    assert_eq!(Value::from(1).try_cmp(&Value::from(2)), Some(Ordering::Less));
    assert_eq!(Value::from(false).try_cmp(&Value::from(true)), Some(Ordering::Less));
    assert_eq!(Value::from(2.5).try_cmp(&Value::from(2.5)), Some(Ordering::Equal));
    assert_eq!(Value::from("b").try_cmp(&Value::from("a")), Some(Ordering::Greater));
}

#[test]
fn test_value_compare_different_kinds() {
    assert_eq!(Value::from(1).try_cmp(&Value::from(1.0)), None);
    assert_eq!(Value::from("1").try_cmp(&Value::from(1)), None);
}

#[test]
fn test_float_nan_is_ordered() {
    let nan = Value::from(f64::NAN);
    assert_eq!(nan.try_cmp(&nan), Some(Ordering::Equal));
    assert_eq!(Value::from(1.0).try_cmp(&nan), Some(Ordering::Less));
    assert_eq!(nan, nan.clone());
}

#[test]
fn test_float_signed_zeros_are_equal() {
    let zero = Value::from(0.0);
    let negative_zero = Value::from(-0.0);
    assert_eq!(zero.try_cmp(&negative_zero), Some(Ordering::Equal));
    assert_eq!(zero, negative_zero);
    assert_eq!(Value::from(-1.0).try_cmp(&negative_zero), Some(Ordering::Less));
    assert_eq!(key![-0.0, "a"].try_cmp(&key![0.0, "a"]).unwrap(), Ordering::Equal);
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::from(3).as_int(), Some(3));
    assert_eq!(Value::from(3).as_float(), None);
    assert_eq!(Value::from("abc").as_text(), Some("abc"));
    assert_eq!(Value::from(true).as_bool(), Some(true));
}

// =============================================================================
// Key Ordering Tests
// =============================================================================

#[test]
fn test_key_lexicographic_order() {
    assert_eq!(key![1, 2].try_cmp(&key![1, 3]).unwrap(), Ordering::Less);
    assert_eq!(key![2, 0].try_cmp(&key![1, 9]).unwrap(), Ordering::Greater);
    assert_eq!(key![1, 1.0, "1"].try_cmp(&key![1, 1.0, "1"]).unwrap(), Ordering::Equal);
}

#[test]
fn test_key_arity_mismatch_is_incomparable() {
    let result = key![1].try_cmp(&key![1, 2]);
    assert!(matches!(result, Err(StoreError::IncomparableKey(_))));
}

#[test]
fn test_key_kind_mismatch_is_incomparable() {
    let result = key![1, "a"].try_cmp(&key![1, 2]);
    assert!(matches!(result, Err(StoreError::IncomparableKey(_))));
}

#[test]
fn test_key_kind_mismatch_after_deciding_position() {
    // The first position already orders the keys, the second still mismatches
    let result = key![1, "a"].try_cmp(&key![2, 2]);
    assert!(matches!(result, Err(StoreError::IncomparableKey(_))));
}

#[test]
fn test_key_display() {
    assert_eq!(key![1, 2.0, "x"].to_string(), "(1, 2.0, \"x\")");
}

#[test]
fn test_key_from_values() {
    let key: Key = vec![Value::from(1), Value::from("a")].into_iter().collect();
    assert_eq!(key, key![1, "a"]);
    assert_eq!(key.arity(), 2);
    assert_eq!(key.kinds().collect::<Vec<_>>(), vec![ScalarKind::Int, ScalarKind::Text]);
}

// =============================================================================
// Document Tests
// =============================================================================

#[test]
fn test_document_columns_keep_insertion_order() {
    let document = doc! { "id" => 1, "zeta" => "z", "alpha" => "a" };
    let columns: Vec<&str> = document.iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(columns, vec!["id", "zeta", "alpha"]);
}

#[test]
fn test_document_overwrite_and_remove_keep_order() {
    let mut document = doc! { "c" => 1, "a" => 2, "b" => 3 };
    document.insert("a", 20);
    assert_eq!(document.remove("c"), Some(Value::from(1)));
    document.insert("c", 10);

    let columns: Vec<&str> = (&document).into_iter().map(|(c, _)| c.as_str()).collect();
    assert_eq!(columns, vec!["a", "b", "c"]);
    assert_eq!(document.get("a"), Some(&Value::from(20)));
}

#[test]
fn test_document_equality_ignores_column_order() {
    assert_eq!(doc! { "id" => 1, "v" => "a" }, doc! { "v" => "a", "id" => 1 });
}

#[test]
fn test_document_insert_returns_previous() {
    let mut document = Document::new();
    assert_eq!(document.insert("v", "a"), None);
    assert_eq!(document.insert("v", "b"), Some(Value::from("a")));
    assert_eq!(document.get("v"), Some(&Value::from("b")));
    assert_eq!(document.len(), 1);
}

#[test]
fn test_document_builder() {
    let document = Document::new().with("id", 1).with("v", "a");
    assert_eq!(document, doc! { "id" => 1, "v" => "a" });
    assert!(document.contains_column("id"));
    assert!(!document.contains_column("missing"));
}

// =============================================================================
// Key Extraction Tests
// =============================================================================

#[test]
fn test_extract_in_declaration_order() {
    let schema = schema(&["id1", "id0"]);
    let document = doc! { "id0" => 1, "id1" => 2, "first_name" => "Marko" };

    assert_eq!(schema.extract(&document).unwrap(), key![2, 1]);
}

#[test]
fn test_extract_missing_column() {
    let schema = schema(&["id0", "id1"]);
    let document = doc! { "id0" => 1, "first_name" => "Marko" };

    match schema.extract(&document) {
        Err(StoreError::MissingKeyColumn(column)) => assert_eq!(column, "id1"),
        other => panic!("Expected MissingKeyColumn, got {:?}", other),
    }
}

// =============================================================================
// Key Validation Tests
// =============================================================================

#[test]
fn test_validate_pins_kinds_from_first_key() {
    let mut schema = schema(&["a", "b"]);
    assert_eq!(schema.kinds(), None);

    schema.validate(&key![1, "x"]).unwrap();

    assert_eq!(schema.kinds(), Some(&[ScalarKind::Int, ScalarKind::Text][..]));
    assert!(schema.validate(&key![2, "y"]).is_ok());
    assert!(matches!(
        schema.validate(&key!["x", 2]),
        Err(StoreError::IncomparableKey(_))
    ));
}

#[test]
fn test_validate_declared_kinds() {
    let mut schema = KeySchema::new(vec!["id".to_string()], Some(vec![ScalarKind::Float]));

    assert!(matches!(
        schema.validate(&key![1]),
        Err(StoreError::IncomparableKey(_))
    ));
    assert!(schema.validate(&key![1.0]).is_ok());
}

#[test]
fn test_check_arity() {
    let schema = schema(&["a", "b"]);
    assert!(matches!(schema.check(&key![1]), Err(StoreError::IncomparableKey(_))));
    assert!(schema.check(&key![1, 2]).is_ok());
    // check never pins
    assert_eq!(schema.kinds(), None);
}
