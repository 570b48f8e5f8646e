//! Rune-aware string builtins.
//!
//! Indexing and length are in runes, never bytes. `Substring` accepts
//! negative from-the-end indices, clamps out-of-range ones, and yields the
//! empty string when the range is out of order.

use vex_ir::Expr;
use vex_value::{wrong_receiver_type, EvalResult, Value};

use super::helpers::{eval_args, require_int_arg, require_str_arg, string_receiver};
use crate::interpreter::Evaluator;
use crate::registry::{BuiltinDef, BuiltinRegistry};
use crate::scope::Scope;

pub(crate) fn register(registry: &mut BuiltinRegistry) {
    registry.register(BuiltinDef {
        name: "Upper",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: upper,
    });
    registry.register(BuiltinDef {
        name: "Lower",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: lower,
    });
    registry.register(BuiltinDef {
        name: "Trim",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: trim,
    });
    registry.register(BuiltinDef {
        name: "TrimPrefix",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: trim_prefix,
    });
    registry.register(BuiltinDef {
        name: "TrimSuffix",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: trim_suffix,
    });
    registry.register(BuiltinDef {
        name: "Split",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: split,
    });
    registry.register(BuiltinDef {
        name: "Join",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: join,
    });
    registry.register(BuiltinDef {
        name: "StartsWith",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: starts_with,
    });
    registry.register(BuiltinDef {
        name: "EndsWith",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: ends_with,
    });
    registry.register(BuiltinDef {
        name: "Replace",
        min_args: 2,
        max_args: Some(2),
        max_params: 0,
        accept_body: false,
        func: replace,
    });
    registry.register(BuiltinDef {
        name: "Substring",
        min_args: 1,
        max_args: Some(2),
        max_params: 0,
        accept_body: false,
        func: substring,
    });
}

fn upper(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    Ok(Value::string(string_receiver("Upper", &receiver)?.to_uppercase()))
}

fn lower(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    Ok(Value::string(string_receiver("Lower", &receiver)?.to_lowercase()))
}

fn trim(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    Ok(Value::string(string_receiver("Trim", &receiver)?.trim()))
}

fn trim_prefix(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("TrimPrefix", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let prefix = require_str_arg("TrimPrefix", &args, 0)?;
    Ok(Value::string(s.strip_prefix(prefix).unwrap_or(s)))
}

fn trim_suffix(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("TrimSuffix", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let suffix = require_str_arg("TrimSuffix", &args, 0)?;
    Ok(Value::string(s.strip_suffix(suffix).unwrap_or(s)))
}

/// An empty separator splits into runes.
fn split(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("Split", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let separator = require_str_arg("Split", &args, 0)?;
    let parts: Vec<Value> = if separator.is_empty() {
        s.chars().map(Value::string).collect()
    } else {
        s.split(separator).map(Value::string).collect()
    };
    Ok(Value::list(parts))
}

fn join(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let items = super::helpers::sequence_receiver("Join", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let separator = require_str_arg("Join", &args, 0)?;
    let mut parts = Vec::with_capacity(items.len());
    for item in &items {
        match item {
            Value::Str(s) => parts.push(s.as_str()),
            other => {
                return Err(wrong_receiver_type(
                    "Join",
                    "sequence of strings",
                    other.type_name(),
                ));
            }
        }
    }
    Ok(Value::string(parts.join(separator)))
}

fn starts_with(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("StartsWith", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let prefix = require_str_arg("StartsWith", &args, 0)?;
    Ok(Value::Bool(s.starts_with(prefix)))
}

fn ends_with(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("EndsWith", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let suffix = require_str_arg("EndsWith", &args, 0)?;
    Ok(Value::Bool(s.ends_with(suffix)))
}

/// Replaces all occurrences.
fn replace(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("Replace", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let from = require_str_arg("Replace", &args, 0)?;
    let to = require_str_arg("Replace", &args, 1)?;
    Ok(Value::string(s.replace(from, to)))
}

/// Rune-indexed substring with negative-from-end and clamping semantics.
fn substring(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("Substring", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let rune_len = i64::try_from(s.chars().count()).unwrap_or(i64::MAX);
    let start = require_int_arg("Substring", &args, 0)?;
    let end = if args.len() > 1 {
        require_int_arg("Substring", &args, 1)?
    } else {
        rune_len
    };
    let clamp = |i: i64| -> usize {
        let i = if i < 0 { i.saturating_add(rune_len) } else { i };
        usize::try_from(i.clamp(0, rune_len)).unwrap_or(0)
    };
    let (start, end) = (clamp(start), clamp(end));
    if start >= end {
        return Ok(Value::string(""));
    }
    let sub: String = s.chars().skip(start).take(end - start).collect();
    Ok(Value::string(sub))
}
