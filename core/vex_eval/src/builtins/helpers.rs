//! Argument validation and shared utilities for builtins.

use smallvec::SmallVec;

use vex_ir::Expr;
use vex_value::{
    get_int64, non_boolean_operand, wrong_arg_type, wrong_receiver_type, EvalError, EvalResult,
    Value,
};

use crate::interpreter::Evaluator;
use crate::scope::Scope;

/// Evaluated positional arguments, inline up to four.
pub(crate) type Args = SmallVec<[Value; 4]>;

/// Evaluate argument subtrees left to right.
pub(crate) fn eval_args(ev: &Evaluator, args: &[Expr], scope: &Scope) -> Result<Args, EvalError> {
    let mut out = Args::new();
    for arg in args {
        out.push(ev.evaluate(arg, scope)?);
    }
    Ok(out)
}

/// Receiver as a sequence: nil is empty, lists clone, vectors widen to
/// float values.
pub(crate) fn sequence_receiver(display: &str, receiver: &Value) -> Result<Vec<Value>, EvalError> {
    match receiver {
        Value::Nil => Ok(Vec::new()),
        Value::List(items) => Ok((**items).clone()),
        Value::Vector(elements) => Ok(elements.iter().map(|x| Value::Float(*x)).collect()),
        _ => Err(wrong_receiver_type(
            display,
            "sequence",
            receiver.type_name(),
        )),
    }
}

/// Receiver as a string.
pub(crate) fn string_receiver<'a>(
    display: &str,
    receiver: &'a Value,
) -> Result<&'a str, EvalError> {
    match receiver {
        Value::Str(s) => Ok(s.as_str()),
        _ => Err(wrong_receiver_type(display, "string", receiver.type_name())),
    }
}

/// Extract a string argument at the given index.
pub(crate) fn require_str_arg<'a>(
    display: &str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a str, EvalError> {
    match args.get(index) {
        Some(Value::Str(s)) => Ok(s.as_str()),
        _ => Err(wrong_arg_type(display, "string")),
    }
}

/// Extract an integer argument at the given index.
pub(crate) fn require_int_arg(display: &str, args: &[Value], index: usize) -> Result<i64, EvalError> {
    match args.get(index).and_then(get_int64) {
        Some(n) => Ok(n),
        None => Err(wrong_arg_type(display, "integer")),
    }
}

/// Lambda parameter name at an index; unnamed parameters default to their
/// ordinal (`"0"`, `"1"`).
pub(crate) fn param_name(params: &[String], index: usize) -> String {
    params
        .get(index)
        .cloned()
        .unwrap_or_else(|| index.to_string())
}

/// Evaluate a lambda body in a child scope binding one parameter.
pub(crate) fn eval_lambda(
    ev: &Evaluator,
    body: &Expr,
    scope: &Scope,
    param: &str,
    value: Value,
) -> EvalResult {
    let child = scope.with_var(param, value);
    ev.evaluate(body, &child)
}

/// A lambda body result that must be boolean.
pub(crate) fn require_bool(display: &str, value: Value) -> Result<bool, EvalError> {
    match value {
        Value::Bool(b) => Ok(b),
        other => Err(non_boolean_operand(display, other.type_name())),
    }
}

/// Convert a collection length to a value, with overflow check.
pub(crate) fn len_to_value(len: usize) -> EvalResult {
    i64::try_from(len)
        .map(Value::Int)
        .map_err(|_| EvalError::new("collection too large"))
}
