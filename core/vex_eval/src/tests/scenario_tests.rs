use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;

use vex_ir::Expr;
use vex_value::{EvalResult, Value};

use crate::interpreter::Evaluator;
use crate::scope::Scope;

fn eval(expr: &Expr) -> EvalResult {
    Evaluator::new().evaluate(expr, &Scope::new())
}

fn eval_in(expr: &Expr, scope: &Scope) -> EvalResult {
    Evaluator::new().evaluate(expr, scope)
}

fn props(entries: Vec<(&str, Value)>) -> Scope {
    let map: FxHashMap<String, Value> = entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    Scope::from_props(map)
}

#[test]
fn collection_pipeline() {
    // [1, 2, 3, 4, 5].Filter { |x| x > 2 }.Map { |x| x * 10 }.Sum()
    let source = Expr::list((1..=5).map(Expr::int).collect());
    let filtered = Expr::method(
        source,
        "Filter",
        vec![
            Expr::params(vec!["x"]),
            Expr::sexpr(">", vec![Expr::var("x"), Expr::int(2)]),
        ],
    );
    let mapped = Expr::method(
        filtered,
        "Map",
        vec![
            Expr::params(vec!["x"]),
            Expr::sexpr("*", vec![Expr::var("x"), Expr::int(10)]),
        ],
    );
    let summed = Expr::method(mapped, "Sum", vec![]);
    assert_eq!(eval(&summed).unwrap(), Value::Int(120));
}

#[test]
fn vacuous_truth_and_nil_short_circuit() {
    // ages then ages.All { |a| a >= 0 }
    let expr = Expr::method(
        Expr::prop("ages"),
        "Then",
        vec![
            Expr::params(vec!["xs"]),
            Expr::method(
                Expr::prop("ages"),
                "All",
                vec![
                    Expr::params(vec!["a"]),
                    Expr::sexpr(">=", vec![Expr::var("a"), Expr::int(0)]),
                ],
            ),
        ],
    );

    // No "ages" property: the outer Then sees nil and short-circuits
    assert_eq!(eval(&expr).unwrap(), Value::Nil);

    // An empty "ages": vacuous truth
    let scope = props(vec![("ages", Value::list(vec![]))]);
    assert_eq!(eval_in(&expr, &scope).unwrap(), Value::Bool(true));

    // A violating element flips the verdict
    let scope = props(vec![(
        "ages",
        Value::list(vec![Value::Int(3), Value::Int(-1)]),
    )]);
    assert_eq!(eval_in(&expr, &scope).unwrap(), Value::Bool(false));
}

#[test]
fn mixed_numeric_ordering_is_exact_past_2_53() {
    const TWO_53: u64 = 9_007_199_254_740_992;

    // Values arrive through the property layer, as they do from a loader
    let scope = props(vec![(
        "xs",
        Value::list(vec![
            Value::Uint(TWO_53 + 1),
            Value::Float(9_007_199_254_740_992.0),
            Value::Int(9_007_199_254_740_992),
        ]),
    )]);
    let sorted = Expr::method(Expr::prop("xs"), "Sort", vec![]);
    let Value::List(items) = eval_in(&sorted, &scope).unwrap() else {
        panic!("expected list");
    };

    // float64(2^53) and int64(2^53) compare equal; the stable sort keeps
    // their input order, and uint64(2^53 + 1) sorts strictly above both
    assert_eq!(items[0], Value::Float(9_007_199_254_740_992.0));
    assert_eq!(items[1], Value::Int(9_007_199_254_740_992));
    assert_eq!(items[2], Value::Uint(TWO_53 + 1));
}

#[test]
fn type_checker_predicate_over_datatype_literal() {
    // value =~ integer, with value bound to float64(42.0)
    let expr = Expr::sexpr("=~", vec![Expr::var("value"), Expr::datatype("integer")]);
    let scope = Scope::new().with_var("value", Value::Float(42.0));
    assert_eq!(eval_in(&expr, &scope).unwrap(), Value::Bool(true));

    let scope = Scope::new().with_var("value", Value::Float(42.5));
    assert_eq!(eval_in(&expr, &scope).unwrap(), Value::Bool(false));
}

#[test]
fn division_semantics() {
    let int_div = Expr::sexpr("/", vec![Expr::int(10), Expr::int(0)]);
    assert!(eval(&int_div).unwrap_err().message.contains("division by zero"));

    let float_div = Expr::sexpr("/", vec![Expr::float(10.0), Expr::float(0.0)]);
    assert_eq!(eval(&float_div).unwrap(), Value::Float(f64::INFINITY));

    let modulo = Expr::sexpr("%", vec![Expr::int(10), Expr::int(0)]);
    assert!(eval(&modulo).unwrap_err().message.contains("modulo by zero"));
}

#[test]
fn realistic_invariant_over_properties() {
    // name.Len() <= 10 && age >= 0 && (tags then tags.Unique().Len() == tags.Len()) lest true
    let name_ok = Expr::sexpr(
        "<=",
        vec![
            Expr::method(Expr::prop("name"), "Len", vec![]),
            Expr::int(10),
        ],
    );
    let age_ok = Expr::sexpr(">=", vec![Expr::prop("age"), Expr::int(0)]);
    let tags_unique = Expr::method(
        Expr::method(
            Expr::prop("tags"),
            "Then",
            vec![
                Expr::params(vec!["ts"]),
                Expr::sexpr(
                    "==",
                    vec![
                        Expr::method(
                            Expr::method(Expr::var("ts"), "Unique", vec![]),
                            "Len",
                            vec![],
                        ),
                        Expr::method(Expr::var("ts"), "Len", vec![]),
                    ],
                ),
            ],
        ),
        "Lest",
        vec![Expr::args(vec![Expr::boolean(true)])],
    );
    let invariant = Expr::sexpr("&&", vec![name_ok, age_ok, tags_unique]);

    let ev = Evaluator::new();

    // All properties present and conforming
    let scope = props(vec![
        ("name", Value::string("widget")),
        ("age", Value::Int(3)),
        ("tags", Value::list(vec![Value::string("a"), Value::string("b")])),
    ]);
    assert!(ev.evaluate_bool(&invariant, &scope).unwrap());

    // Missing optional tags: the lest arm covers it
    let scope = props(vec![
        ("name", Value::string("widget")),
        ("age", Value::Int(3)),
    ]);
    assert!(ev.evaluate_bool(&invariant, &scope).unwrap());

    // Duplicate tags violate
    let scope = props(vec![
        ("name", Value::string("widget")),
        ("age", Value::Int(3)),
        ("tags", Value::list(vec![Value::string("a"), Value::string("a")])),
    ]);
    assert!(!ev.evaluate_bool(&invariant, &scope).unwrap());
}

#[test]
fn deferred_numbers_flow_through_arithmetic() {
    // A JSON-deferred number property participates in arithmetic after
    // normalization on property read
    let scope = props(vec![("score", Value::number("41"))]);
    let expr = Expr::sexpr("+", vec![Expr::prop("score"), Expr::int(1)]);
    assert_eq!(eval_in(&expr, &scope).unwrap(), Value::Int(42));
}
