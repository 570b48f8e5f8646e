//! Nil-aware control-flow builtins.
//!
//! `Then` and `Lest` are the two halves of optional chaining over
//! properties: `prop then ...` runs only on present data, `prop lest ...`
//! supplies the fallback. Their deferred operands are never evaluated on
//! the short-circuited path.

use vex_ir::Expr;
use vex_value::{EvalResult, Value};

use super::helpers::{eval_lambda, param_name};
use crate::interpreter::Evaluator;
use crate::registry::{BuiltinDef, BuiltinRegistry};
use crate::scope::Scope;

pub(crate) fn register(registry: &mut BuiltinRegistry) {
    registry.register(BuiltinDef {
        name: "Then",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: then,
    });
    registry.register(BuiltinDef {
        name: "Lest",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: lest,
    });
    registry.register(BuiltinDef {
        name: "With",
        min_args: 0,
        max_args: Some(0),
        max_params: 1,
        accept_body: true,
        func: with,
    });
}

/// Evaluates the body with the receiver bound only when the receiver is
/// non-nil; nil short-circuits to nil without touching the body.
fn then(
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
    if receiver.is_nil() {
        return Ok(Value::Nil);
    }
    let param = param_name(params, 0);
    eval_lambda(ev, body, scope, &param, receiver)
}

/// Returns the receiver when non-nil; otherwise evaluates the deferred
/// default expression.
fn lest(
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

/// Always evaluates the body with the receiver bound, nil included.
fn with(
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
    let param = param_name(params, 0);
    eval_lambda(ev, body, scope, &param, receiver)
}
