use pretty_assertions::assert_eq;
use regex::Regex;

use vex_value::Value;

use super::{checker_for, in_enum, is_date, is_integer, is_string, matches_pattern};
use crate::Constraint;

#[test]
fn integer_checker_accepts_whole_floats() {
    let checker = is_integer();
    assert!(checker.check(&Value::Int(42)).is_ok());
    // A whole-number float satisfies the integer checker
    assert!(checker.check(&Value::Float(42.0)).is_ok());
    assert!(checker.check(&Value::Float(42.5)).is_err());
    assert!(checker.check(&Value::string("42")).is_err());
}

#[test]
fn string_checker_names_itself() {
    let checker = is_string();
    assert_eq!(checker.name(), "string");
    assert!(checker.check(&Value::string("x")).is_ok());
    assert!(checker.check(&Value::Int(1)).is_err());
}

#[test]
fn date_checker() {
    let checker = is_date();
    assert!(checker.check(&Value::string("2024-06-01")).is_ok());
    assert!(checker.check(&Value::string("tomorrow")).is_err());
}

#[test]
fn pattern_checker_carries_the_message() {
    let checker = matches_pattern(Regex::new("^[a-z]+$").unwrap());
    assert!(checker.check(&Value::string("abc")).is_ok());
    let message = checker.check(&Value::string("ABC")).unwrap_err();
    assert!(message.contains("does not match"));
}

#[test]
fn enum_checker() {
    let checker = in_enum(vec!["on".to_string(), "off".to_string()]);
    assert!(checker.check(&Value::string("on")).is_ok());
    assert!(checker.check(&Value::string("maybe")).is_err());
}

#[test]
fn checker_for_uses_the_kind_name() {
    let checker = checker_for(Constraint::Vector { dim: 2 });
    assert_eq!(checker.name(), "vector");
    assert!(checker.check(&Value::vector(vec![1.0, 2.0])).is_ok());
    assert!(checker.check(&Value::vector(vec![1.0])).is_err());
}
