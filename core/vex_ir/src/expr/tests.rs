use pretty_assertions::assert_eq;
use regex::Regex;

use super::{Expr, Literal};

#[test]
fn factory_scalars() {
    assert_eq!(Expr::nil(), Expr::Literal(Literal::Nil));
    assert_eq!(Expr::int(42), Expr::Literal(Literal::Int(42)));
    assert_eq!(Expr::boolean(true), Expr::Literal(Literal::Bool(true)));
    assert_eq!(
        Expr::str("hello"),
        Expr::Literal(Literal::Str("hello".to_string()))
    );
}

#[test]
fn regex_literals_compare_by_source() {
    let a = Expr::regex(Regex::new("^a+$").unwrap());
    let b = Expr::regex(Regex::new("^a+$").unwrap());
    let c = Expr::regex(Regex::new("^b+$").unwrap());
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn var_and_prop_sugar() {
    assert_eq!(Expr::var("x"), Expr::sexpr("$", vec![Expr::str("x")]));
    assert_eq!(Expr::prop("age"), Expr::sexpr("p", vec![Expr::str("age")]));
}

#[test]
fn method_sugar_prepends_receiver_and_name() {
    let expr = Expr::method(Expr::prop("xs"), "Sum", vec![]);
    let Expr::SExpr { op, children } = &expr else {
        panic!("expected s-expression");
    };
    assert_eq!(op, ".");
    assert_eq!(children.len(), 2);
    assert_eq!(children[1], Expr::str("Sum"));
}

#[test]
fn nil_literal_detection() {
    assert!(Expr::nil().is_nil_literal());
    assert!(!Expr::int(0).is_nil_literal());
    assert!(!Expr::var("x").is_nil_literal());
}

#[test]
fn display_round_trips_shapes() {
    let expr = Expr::sexpr(
        "+",
        vec![Expr::int(1), Expr::sexpr("*", vec![Expr::int(2), Expr::int(3)])],
    );
    assert_eq!(expr.to_string(), "(+ 1 (* 2 3))");
}
