use pretty_assertions::assert_eq;
use regex::Regex;

use vex_ir::Expr;
use vex_value::{EvalResult, Value};

use crate::interpreter::Evaluator;
use crate::scope::Scope;

fn eval(expr: &Expr) -> EvalResult {
    Evaluator::new().evaluate(expr, &Scope::new())
}

fn match_call(receiver: &str, pattern: &str) -> Expr {
    Expr::method(
        Expr::str(receiver),
        "Match",
        vec![Expr::args(vec![Expr::regex(Regex::new(pattern).unwrap())])],
    )
}

#[test]
fn match_returns_full_match_and_groups() {
    let expr = match_call("v1.22", r"^v(\d+)\.(\d+)$");
    assert_eq!(
        eval(&expr).unwrap(),
        Value::list(vec![
            Value::string("v1.22"),
            Value::string("1"),
            Value::string("22"),
        ])
    );
}

#[test]
fn unmatched_optional_groups_are_nil() {
    let expr = match_call("ab", "^(a)(x)?(b)$");
    assert_eq!(
        eval(&expr).unwrap(),
        Value::list(vec![
            Value::string("ab"),
            Value::string("a"),
            Value::Nil,
            Value::string("b"),
        ])
    );
}

#[test]
fn no_match_is_nil() {
    let expr = match_call("other", "^v");
    assert_eq!(eval(&expr).unwrap(), Value::Nil);
}

#[test]
fn match_contract_violations_error() {
    // Non-string receiver
    let expr = Expr::method(
        Expr::int(1),
        "Match",
        vec![Expr::args(vec![Expr::regex(Regex::new("x").unwrap())])],
    );
    assert!(eval(&expr).is_err());

    // Non-regex argument
    let expr = Expr::method(
        Expr::str("x"),
        "Match",
        vec![Expr::args(vec![Expr::str("x")])],
    );
    assert!(eval(&expr).is_err());
}
