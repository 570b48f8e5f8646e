//! Sequence pipeline builtins.
//!
//! Every collection builtin treats a nil receiver as the empty sequence,
//! which is what gives `All` its vacuous truth and `Sum` its zero on
//! missing data. Equality inside `Unique` and `Contains` goes through the
//! canonical comparator, so NaN deduplicates against NaN.

use std::cmp::Ordering;

use vex_ir::Expr;
use vex_value::{empty_sequence, value_order, EvalError, EvalResult, Value};

use super::helpers::{
    eval_args, eval_lambda, len_to_value, param_name, require_bool, sequence_receiver,
};
use crate::interpreter::Evaluator;
use crate::operators::evaluate_binary;
use crate::registry::{BuiltinDef, BuiltinRegistry};
use crate::scope::Scope;

pub(crate) fn register(registry: &mut BuiltinRegistry) {
    registry.register(BuiltinDef {
        name: "Reduce",
        min_args: 0,
        max_args: Some(1),
        max_params: 2,
        accept_body: true,
        func: reduce,
    });
    registry.register(BuiltinDef {
        name: "Map",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: map,
    });
    registry.register(BuiltinDef {
        name: "Filter",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: filter,
    });
    registry.register(BuiltinDef {
        name: "Count",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: count,
    });
    registry.register(BuiltinDef {
        name: "All",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: all,
    });
    registry.register(BuiltinDef {
        name: "Any",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: any,
    });
    registry.register(BuiltinDef {
        name: "AllOrNone",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: all_or_none,
    });
    registry.register(BuiltinDef {
        name: "Compact",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: compact,
    });
    registry.register(BuiltinDef {
        name: "Unique",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: unique,
    });
    registry.register(BuiltinDef {
        name: "Len",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: len,
    });
    registry.register(BuiltinDef {
        name: "Sum",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: sum,
    });
    registry.register(BuiltinDef {
        name: "First",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: first,
    });
    registry.register(BuiltinDef {
        name: "Last",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: last,
    });
    registry.register(BuiltinDef {
        name: "Sort",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: sort,
    });
    registry.register(BuiltinDef {
        name: "Reverse",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: reverse,
    });
    registry.register(BuiltinDef {
        name: "Flatten",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: flatten,
    });
    registry.register(BuiltinDef {
        name: "Contains",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: contains,
    });
}

fn map(
    ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("Map", &receiver)?;
    let param = param_name(params, 0);
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        out.push(eval_lambda(ev, body, scope, &param, item)?);
    }
    Ok(Value::list(out))
}

fn filter(
    ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("Filter", &receiver)?;
    let param = param_name(params, 0);
    let mut out = Vec::new();
    for item in items {
        let keep = eval_lambda(ev, body, scope, &param, item.clone())?;
        if require_bool("Filter", keep)? {
            out.push(item);
        }
    }
    Ok(Value::list(out))
}

fn count(
    ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("Count", &receiver)?;
    let param = param_name(params, 0);
    let mut matches = 0usize;
    for item in items {
        let verdict = eval_lambda(ev, body, scope, &param, item)?;
        if require_bool("Count", verdict)? {
            matches += 1;
        }
    }
    len_to_value(matches)
}

/// Vacuously true on the empty sequence.
fn all(
    ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("All", &receiver)?;
    let param = param_name(params, 0);
    for item in items {
        let verdict = eval_lambda(ev, body, scope, &param, item)?;
        if !require_bool("All", verdict)? {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

fn any(
    ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("Any", &receiver)?;
    let param = param_name(params, 0);
    for item in items {
        let verdict = eval_lambda(ev, body, scope, &param, item)?;
        if require_bool("Any", verdict)? {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// True when every element matches or none does; vacuously true when
/// empty.
fn all_or_none(
    ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("AllOrNone", &receiver)?;
    let param = param_name(params, 0);
    let total = items.len();
    let mut matches = 0usize;
    for item in items {
        let verdict = eval_lambda(ev, body, scope, &param, item)?;
        if require_bool("AllOrNone", verdict)? {
            matches += 1;
        }
    }
    Ok(Value::Bool(matches == 0 || matches == total))
}

/// Fold with an optional initial value; parameters default to `"0"` for
/// the accumulator and `"1"` for the element.
fn reduce(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let Some(body) = body else {
        unreachable!("validated by the call gate")
    };
    let items = sequence_receiver("Reduce", &receiver)?;
    let init = eval_args(ev, args, scope)?.into_iter().next();
    let mut iter = items.into_iter();
    let mut acc = match init {
        Some(init) => init,
        None => match iter.next() {
            Some(head) => head,
            None => return Err(empty_sequence("reduce")),
        },
    };
    let acc_param = param_name(params, 0);
    let elem_param = param_name(params, 1);
    for item in iter {
        let child = scope.with_var(&acc_param, acc).with_var(&elem_param, item);
        acc = ev.evaluate(body, &child)?;
    }
    Ok(acc)
}

/// Removes nil entries only.
fn compact(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("Compact", &receiver)?;
    Ok(Value::list(
        items.into_iter().filter(|v| !v.is_nil()).collect(),
    ))
}

/// First occurrence wins; equality is comparator equality, so NaN
/// deduplicates against NaN.
fn unique(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("Unique", &receiver)?;
    let mut out: Vec<Value> = Vec::new();
    for item in items {
        let seen = out
            .iter()
            .any(|existing| matches!(value_order(existing, &item), Ok(Ordering::Equal)));
        if !seen {
            out.push(item);
        }
    }
    Ok(Value::list(out))
}

/// Length in elements for sequences and maps, in runes for strings.
fn len(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    match &receiver {
        Value::Nil => Ok(Value::Int(0)),
        Value::Str(s) => len_to_value(s.chars().count()),
        Value::Map(entries) => len_to_value(entries.len()),
        Value::Vector(elements) => len_to_value(elements.len()),
        Value::List(items) => len_to_value(items.len()),
        _ => Err(vex_value::wrong_receiver_type(
            "Len",
            "sequence or string",
            receiver.type_name(),
        )),
    }
}

/// Integer zero on the empty sequence; promotion follows `+`.
fn sum(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("Sum", &receiver)?;
    let mut acc = Value::Int(0);
    for item in items {
        acc = evaluate_binary("+", acc, item)?;
    }
    Ok(acc)
}

fn first(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("First", &receiver)?;
    Ok(items.into_iter().next().unwrap_or(Value::Nil))
}

fn last(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("Last", &receiver)?;
    Ok(items.into_iter().next_back().unwrap_or(Value::Nil))
}

/// Stable sort in the canonical order.
///
/// The sort runs to completion even across incomparable pairs; the first
/// comparator error is recorded and returned afterwards, and the
/// partially-sorted result is discarded.
fn sort(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let mut items = sequence_receiver("Sort", &receiver)?;
    let mut first_error: Option<EvalError> = None;
    items.sort_by(|a, b| match value_order(a, b) {
        Ok(ord) => ord,
        Err(e) => {
            if first_error.is_none() {
                first_error = Some(e);
            }
            Ordering::Equal
        }
    });
    match first_error {
        Some(e) => Err(e),
        None => Ok(Value::list(items)),
    }
}

fn reverse(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let mut items = sequence_receiver("Reverse", &receiver)?;
    items.reverse();
    Ok(Value::list(items))
}

/// Unwraps exactly one level of nesting; non-sequence elements pass
/// through.
fn flatten(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("Flatten", &receiver)?;
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match &item {
            Value::List(inner) => out.extend(inner.iter().cloned()),
            Value::Vector(elements) => out.extend(elements.iter().map(|x| Value::Float(*x))),
            _ => out.push(item),
        }
    }
    Ok(Value::list(out))
}

/// Membership via the comparator; incomparable pairs count as not equal.
fn contains(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let items = sequence_receiver("Contains", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let needle = &args[0];
    let found = items
        .iter()
        .any(|item| matches!(value_order(item, needle), Ok(Ordering::Equal)));
    Ok(Value::Bool(found))
}
