//! Numeric builtins.

use vex_ir::Expr;
use vex_value::{
    empty_sequence, integer_overflow, less, value_order, wrong_receiver_type, EvalResult, Value,
};

use super::helpers::{eval_args, sequence_receiver};
use crate::interpreter::Evaluator;
use crate::registry::{BuiltinDef, BuiltinRegistry};
use crate::scope::Scope;

pub(crate) fn register(registry: &mut BuiltinRegistry) {
    registry.register(BuiltinDef {
        name: "Abs",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: abs,
    });
    registry.register(BuiltinDef {
        name: "Floor",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: floor,
    });
    registry.register(BuiltinDef {
        name: "Ceil",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: ceil,
    });
    registry.register(BuiltinDef {
        name: "Round",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: round,
    });
    registry.register(BuiltinDef {
        name: "Min",
        min_args: 0,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: min,
    });
    registry.register(BuiltinDef {
        name: "Max",
        min_args: 0,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: max,
    });
    registry.register(BuiltinDef {
        name: "Compare",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: compare,
    });
}

fn abs(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    match receiver {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow("absolute value")),
        Value::Uint(n) => Ok(Value::Uint(n)),
        Value::Float(f) => Ok(Value::Float(f.abs())),
        other => Err(wrong_receiver_type("Abs", "number", other.type_name())),
    }
}

fn floor(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    match receiver {
        Value::Int(_) | Value::Uint(_) => Ok(receiver),
        Value::Float(f) => Ok(Value::Float(f.floor())),
        other => Err(wrong_receiver_type("Floor", "number", other.type_name())),
    }
}

fn ceil(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    match receiver {
        Value::Int(_) | Value::Uint(_) => Ok(receiver),
        Value::Float(f) => Ok(Value::Float(f.ceil())),
        other => Err(wrong_receiver_type("Ceil", "number", other.type_name())),
    }
}

/// Banker's rounding: halves go to the even neighbor.
fn round(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    match receiver {
        Value::Int(_) | Value::Uint(_) => Ok(receiver),
        Value::Float(f) => Ok(Value::Float(f.round_ties_even())),
        other => Err(wrong_receiver_type("Round", "number", other.type_name())),
    }
}

/// Dual form: with an argument, a two-value comparison; without, the
/// receiver must be a sequence and the comparator decides. Incomparable
/// pairs propagate their error.
fn min(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    extremum(ev, "Min", receiver, args, scope, false)
}

fn max(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    extremum(ev, "Max", receiver, args, scope, true)
}

fn extremum(
    ev: &Evaluator,
    display: &str,
    receiver: Value,
    args: &[Expr],
    scope: &Scope,
    want_greater: bool,
) -> EvalResult {
    // true when the candidate should replace the current pick; ties keep
    // the earlier element
    let pick = |current: &Value, candidate: &Value| {
        if want_greater {
            less(current, candidate)
        } else {
            less(candidate, current)
        }
    };
    if let Some(other) = eval_args(ev, args, scope)?.into_iter().next() {
        return if pick(&receiver, &other)? {
            Ok(other)
        } else {
            Ok(receiver)
        };
    }
    let items = sequence_receiver(display, &receiver)?;
    let mut iter = items.into_iter();
    let Some(mut best) = iter.next() else {
        return Err(empty_sequence(if want_greater { "max" } else { "min" }));
    };
    for item in iter {
        if pick(&best, &item)? {
            best = item;
        }
    }
    Ok(best)
}

/// Three-way comparison via the canonical order.
fn compare(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let args = eval_args(ev, args, scope)?;
    let ord = value_order(&receiver, &args[0])?;
    Ok(Value::Int(match ord {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }))
}
