use pretty_assertions::assert_eq;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::{CheckerValue, Value};

#[test]
fn type_names_are_canonical() {
    assert_eq!(Value::Nil.type_name(), "nil");
    assert_eq!(Value::Bool(true).type_name(), "bool");
    assert_eq!(Value::Int(1).type_name(), "int");
    assert_eq!(Value::Uint(u64::MAX).type_name(), "int");
    assert_eq!(Value::Float(1.5).type_name(), "float");
    assert_eq!(Value::string("x").type_name(), "string");
    assert_eq!(Value::list(vec![]).type_name(), "list");
    assert_eq!(Value::vector(vec![1.0]).type_name(), "vector");
}

#[test]
fn structural_equality_floats_are_ieee() {
    assert_eq!(Value::Float(1.5), Value::Float(1.5));
    assert_ne!(Value::Float(f64::NAN), Value::Float(f64::NAN));
}

#[test]
fn regexes_compare_by_source() {
    let a = Value::regex(Regex::new("^ab$").unwrap());
    let b = Value::regex(Regex::new("^ab$").unwrap());
    assert_eq!(a, b);
}

#[test]
fn cross_type_equality_is_false() {
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Nil, Value::Bool(false));
}

#[test]
fn display_lists_and_maps() {
    let list = Value::list(vec![Value::Int(1), Value::string("a")]);
    assert_eq!(list.to_string(), "[1, a]");

    let mut entries = FxHashMap::default();
    entries.insert("b".to_string(), Value::Int(2));
    entries.insert("a".to_string(), Value::Int(1));
    // Keys print in sorted order
    assert_eq!(Value::map(entries).to_string(), "{a: 1, b: 2}");
}

#[test]
fn checker_runs_predicate() {
    let checker = CheckerValue::new("positive", |v| match v {
        Value::Int(n) if *n > 0 => Ok(()),
        _ => Err("not a positive int".to_string()),
    });
    assert!(checker.check(&Value::Int(3)).is_ok());
    assert!(checker.check(&Value::Int(-3)).is_err());
    assert_eq!(checker.name(), "positive");
}

#[test]
fn values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
