use chrono::DateTime;
use pretty_assertions::assert_eq;
use regex::Regex;

use vex_value::Value;

use super::check_value;
use crate::{Constraint, ValueErrorKind};

fn unbounded_int() -> Constraint {
    Constraint::Integer {
        min: None,
        max: None,
    }
}

fn unbounded_float() -> Constraint {
    Constraint::Float {
        min: None,
        max: None,
    }
}

// =========================================================================
// Classification: type mismatch vs constraint failure
// =========================================================================

#[test]
fn string_against_integer_is_type_mismatch() {
    let err = check_value(&Value::string("hello"), &unbounded_int()).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::TypeMismatch);
}

#[test]
fn bound_violation_is_constraint_fail() {
    let c = Constraint::Integer {
        min: Some(10),
        max: None,
    };
    let err = check_value(&Value::Int(5), &c).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
}

#[test]
fn nan_against_float_is_constraint_fail_not_finite() {
    let err = check_value(&Value::Float(f64::NAN), &unbounded_float()).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
    assert!(err.message.contains("not finite"));
}

#[test]
fn nan_against_integer_is_constraint_fail() {
    let err = check_value(&Value::Float(f64::NAN), &unbounded_int()).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
    assert!(err.message.contains("not finite"));
}

#[test]
fn fractional_float_against_integer_is_type_mismatch() {
    let err = check_value(&Value::Float(2.5), &unbounded_int()).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::TypeMismatch);
}

#[test]
fn nil_is_always_valid() {
    for c in [
        unbounded_int(),
        Constraint::Boolean,
        Constraint::Date,
        Constraint::Vector { dim: 3 },
        Constraint::Alias {
            name: "Unbound".to_string(),
            resolved: None,
        },
    ] {
        assert!(check_value(&Value::Nil, &c).is_ok());
    }
}

// =========================================================================
// Integer and float acceptance
// =========================================================================

#[test]
fn integer_accepts_whole_floats() {
    assert!(check_value(&Value::Float(42.0), &unbounded_int()).is_ok());
    assert!(check_value(&Value::Uint(42), &unbounded_int()).is_ok());
}

#[test]
fn oversized_unsigned_is_constraint_fail() {
    let err = check_value(&Value::Uint(u64::MAX), &unbounded_int()).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
    assert!(err.message.contains("out of integer range"));
}

#[test]
fn deferred_numbers_check_after_normalization() {
    assert!(check_value(&Value::number("42"), &unbounded_int()).is_ok());
    assert!(check_value(&Value::number("2.5"), &unbounded_float()).is_ok());
    assert!(check_value(&Value::number("2.5"), &unbounded_int())
        .unwrap_err()
        .is_type_mismatch());
}

#[test]
fn integer_bounds_are_inclusive() {
    let c = Constraint::Integer {
        min: Some(0),
        max: Some(10),
    };
    assert!(check_value(&Value::Int(0), &c).is_ok());
    assert!(check_value(&Value::Int(10), &c).is_ok());
    assert!(check_value(&Value::Int(11), &c).is_err());
}

#[test]
fn float_accepts_promoted_integers() {
    let c = Constraint::Float {
        min: Some(0.0),
        max: Some(100.0),
    };
    assert!(check_value(&Value::Int(42), &c).is_ok());
    assert!(check_value(&Value::Float(100.5), &c).is_err());
}

#[test]
fn float_rejects_infinities() {
    let err = check_value(&Value::Float(f64::INFINITY), &unbounded_float()).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
}

// =========================================================================
// Strings, enums, patterns
// =========================================================================

#[test]
fn string_length_counts_runes() {
    let c = Constraint::String {
        min_len: None,
        max_len: Some(4),
    };
    // 4 runes, 5 bytes
    assert!(check_value(&Value::string("café"), &c).is_ok());
    assert!(check_value(&Value::string("cafés"), &c).is_err());
}

#[test]
fn enum_is_case_sensitive() {
    let c = Constraint::Enum {
        values: vec!["red".to_string(), "green".to_string()],
    };
    assert!(check_value(&Value::string("red"), &c).is_ok());
    let err = check_value(&Value::string("Red"), &c).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
}

#[test]
fn pattern_requires_every_regex() {
    let c = Constraint::Pattern {
        patterns: vec![
            Regex::new("^[a-z]+$").unwrap(),
            Regex::new("tree").unwrap(),
        ],
    };
    assert!(check_value(&Value::string("subtree"), &c).is_ok());
    assert!(check_value(&Value::string("forest"), &c).is_err());
    assert!(check_value(&Value::Int(1), &c).unwrap_err().is_type_mismatch());
}

// =========================================================================
// Domain types
// =========================================================================

#[test]
fn timestamp_accepts_instant_and_rfc3339_strings() {
    let c = Constraint::Timestamp { format: None };
    let instant = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z").unwrap();
    assert!(check_value(&Value::Timestamp(instant), &c).is_ok());
    assert!(check_value(&Value::string("2024-06-01T12:00:00Z"), &c).is_ok());
    assert!(check_value(&Value::string("2024-06-01T12:00:00.123456789Z"), &c).is_ok());
    assert!(check_value(&Value::string("June 1st"), &c).is_err());
}

#[test]
fn timestamp_custom_format() {
    let c = Constraint::Timestamp {
        format: Some("%Y/%m/%d %H:%M".to_string()),
    };
    assert!(check_value(&Value::string("2024/06/01 12:30"), &c).is_ok());
    // RFC-3339 still accepted as the fallback
    assert!(check_value(&Value::string("2024-06-01T12:00:00Z"), &c).is_ok());
}

#[test]
fn date_requires_exact_shape() {
    assert!(check_value(&Value::string("2024-06-01"), &Constraint::Date).is_ok());
    assert!(check_value(&Value::string("2024-6-1"), &Constraint::Date).is_err());
    assert!(check_value(&Value::string("01/06/2024"), &Constraint::Date).is_err());
    assert!(check_value(&Value::Int(20_240_601), &Constraint::Date)
        .unwrap_err()
        .is_type_mismatch());
}

#[test]
fn uuid_accepts_value_and_string() {
    let id = uuid::Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
    assert!(check_value(&Value::Uuid(id), &Constraint::Uuid).is_ok());
    assert!(check_value(
        &Value::string("67e55044-10b1-426f-9247-bb680e5fe0c8"),
        &Constraint::Uuid
    )
    .is_ok());
    assert!(check_value(&Value::string("not-a-uuid"), &Constraint::Uuid).is_err());
}

// =========================================================================
// Vectors and aliases
// =========================================================================

#[test]
fn vector_dimension_must_match_exactly() {
    let c = Constraint::Vector { dim: 3 };
    assert!(check_value(&Value::vector(vec![1.0, 2.0, 3.0]), &c).is_ok());
    let err = check_value(&Value::vector(vec![1.0, 2.0]), &c).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
}

#[test]
fn vector_nan_element_cites_index() {
    let c = Constraint::Vector { dim: 3 };
    let v = Value::list(vec![
        Value::Float(1.0),
        Value::Float(f64::NAN),
        Value::Float(3.0),
    ]);
    let err = check_value(&v, &c).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
    assert!(err.message.contains("element [1]"));
}

#[test]
fn vector_list_form_accepts_mixed_numerics() {
    let c = Constraint::Vector { dim: 2 };
    let v = Value::list(vec![Value::Int(1), Value::Float(2.5)]);
    assert!(check_value(&v, &c).is_ok());

    let bad = Value::list(vec![Value::Int(1), Value::string("x")]);
    let err = check_value(&bad, &c).unwrap_err();
    assert!(err.message.contains("element [1]"));
}

#[test]
fn unresolved_alias_fails_with_name() {
    let c = Constraint::Alias {
        name: "MyInt".to_string(),
        resolved: None,
    };
    let err = check_value(&Value::Int(10), &c).unwrap_err();
    assert_eq!(err.kind, ValueErrorKind::ConstraintFail);
    assert_eq!(err.message, "unresolved alias: MyInt");
}

#[test]
fn resolved_alias_recurses() {
    let c = Constraint::Alias {
        name: "Port".to_string(),
        resolved: Some(std::sync::Arc::new(Constraint::Integer {
            min: Some(1),
            max: Some(65_535),
        })),
    };
    assert!(check_value(&Value::Int(8080), &c).is_ok());
    assert!(check_value(&Value::Int(0), &c).is_err());
}
