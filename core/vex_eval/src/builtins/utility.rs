//! Utility builtins.

use vex_ir::Expr;
use vex_value::{EvalResult, Value};

use crate::interpreter::Evaluator;
use crate::registry::{BuiltinDef, BuiltinRegistry};
use crate::scope::Scope;

pub(crate) fn register(registry: &mut BuiltinRegistry) {
    registry.register(BuiltinDef {
        name: "TypeOf",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: type_of,
    });
    registry.register(BuiltinDef {
        name: "IsNil",
        min_args: 0,
        max_args: Some(0),
        max_params: 0,
        accept_body: false,
        func: is_nil,
    });
    registry.register(BuiltinDef {
        name: "Default",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: default,
    });
    registry.register(BuiltinDef {
        name: "Coalesce",
        min_args: 0,
        max_args: None,
        max_params: 0,
        accept_body: false,
        func: coalesce,
    });
}

fn type_of(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    Ok(Value::string(receiver.type_name()))
}

fn is_nil(
    _ev: &Evaluator,
    receiver: Value,
    _args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    _scope: &Scope,
) -> EvalResult {
    Ok(Value::Bool(receiver.is_nil()))
}

/// The receiver unless nil, else the deferred fallback.
fn default(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    if !receiver.is_nil() {
        return Ok(receiver);
    }
    ev.evaluate(&args[0], scope)
}

/// First non-nil of `(receiver, args...)`, evaluating deferred arguments
/// left to right and stopping at the first hit; nil when all are nil.
fn coalesce(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    if !receiver.is_nil() {
        return Ok(receiver);
    }
    for arg in args {
        let value = ev.evaluate(arg, scope)?;
        if !value.is_nil() {
            return Ok(value);
        }
    }
    Ok(Value::Nil)
}
