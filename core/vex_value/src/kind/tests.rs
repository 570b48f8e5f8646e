use pretty_assertions::assert_eq;

use super::{classify, Kind};
use crate::Value;

fn kind_of(value: &Value) -> Kind {
    classify(value, None).0
}

#[test]
fn nil_is_unspecified() {
    assert_eq!(classify(&Value::Nil, None), (Kind::Unspecified, Value::Nil));
}

#[test]
fn scalars_map_directly() {
    assert_eq!(kind_of(&Value::Bool(true)), Kind::Bool);
    assert_eq!(kind_of(&Value::string("x")), Kind::String);
    assert_eq!(kind_of(&Value::Int(1)), Kind::Int);
    assert_eq!(kind_of(&Value::Uint(1)), Kind::Int);
    assert_eq!(kind_of(&Value::Float(1.0)), Kind::Float);
}

#[test]
fn deferred_whole_number_normalizes_to_int() {
    let (kind, value) = classify(&Value::number("42"), None);
    assert_eq!(kind, Kind::Int);
    assert_eq!(value, Value::Int(42));

    let (kind, value) = classify(&Value::number("-7"), None);
    assert_eq!(kind, Kind::Int);
    assert_eq!(value, Value::Int(-7));
}

#[test]
fn deferred_decimal_or_exponent_normalizes_to_float() {
    let (kind, value) = classify(&Value::number("2.5"), None);
    assert_eq!(kind, Kind::Float);
    assert_eq!(value, Value::Float(2.5));

    let (kind, value) = classify(&Value::number("1e3"), None);
    assert_eq!(kind, Kind::Float);
    assert_eq!(value, Value::Float(1000.0));
}

#[test]
fn deferred_overflow_falls_back_to_float() {
    // Whole but beyond i64: the float path catches it
    let (kind, value) = classify(&Value::number("92233720368547758080"), None);
    assert_eq!(kind, Kind::Float);
    assert_eq!(value, Value::Float(9.223_372_036_854_776e19));
}

#[test]
fn deferred_garbage_stays_unspecified() {
    let (kind, _) = classify(&Value::number("not a number"), None);
    assert_eq!(kind, Kind::Unspecified);
}

#[test]
fn typed_vector_is_vector_even_empty() {
    assert_eq!(kind_of(&Value::vector(vec![])), Kind::Vector);
    assert_eq!(kind_of(&Value::vector(vec![1.0, 2.0])), Kind::Vector);
}

#[test]
fn numeric_list_promotes_to_vector() {
    let list = Value::list(vec![Value::Int(1), Value::Float(2.5), Value::Uint(3)]);
    let (kind, value) = classify(&list, None);
    assert_eq!(kind, Kind::Vector);
    assert_eq!(value, Value::vector(vec![1.0, 2.5, 3.0]));
}

#[test]
fn mixed_list_short_circuits_to_original() {
    let list = Value::list(vec![Value::Int(1), Value::string("x")]);
    let (kind, value) = classify(&list, None);
    assert_eq!(kind, Kind::Unspecified);
    assert_eq!(value, list);
}

#[test]
fn empty_untyped_list_is_ambiguous() {
    assert_eq!(kind_of(&Value::list(vec![])), Kind::Unspecified);
}

#[test]
fn hook_claims_before_sequence_rules() {
    fn claim_lists(value: &Value) -> Kind {
        match value {
            Value::List(_) => Kind::Vector,
            _ => Kind::Unspecified,
        }
    }
    // The hook claims a list the built-ins would reject
    let list = Value::list(vec![Value::string("x")]);
    let (kind, value) = classify(&list, Some(claim_lists));
    assert_eq!(kind, Kind::Vector);
    assert_eq!(value, list);
}

#[test]
fn hook_unspecified_defers_to_builtins() {
    fn claim_nothing(_: &Value) -> Kind {
        Kind::Unspecified
    }
    let list = Value::list(vec![Value::Int(1)]);
    let (kind, value) = classify(&list, Some(claim_nothing));
    assert_eq!(kind, Kind::Vector);
    assert_eq!(value, Value::vector(vec![1.0]));
}

#[test]
fn maps_are_unspecified() {
    let map = Value::map(rustc_hash::FxHashMap::default());
    assert_eq!(kind_of(&map), Kind::Unspecified);
}
