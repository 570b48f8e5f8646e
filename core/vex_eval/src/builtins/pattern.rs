//! Pattern-matching builtins.

use vex_ir::Expr;
use vex_value::{wrong_arg_type, EvalResult, Value};

use super::helpers::{eval_args, string_receiver};
use crate::interpreter::Evaluator;
use crate::registry::{BuiltinDef, BuiltinRegistry};
use crate::scope::Scope;

pub(crate) fn register(registry: &mut BuiltinRegistry) {
    registry.register(BuiltinDef {
        name: "Match",
        min_args: 1,
        max_args: Some(1),
        max_params: 0,
        accept_body: false,
        func: match_builtin,
    });
}

/// Captures of the first match as `[full, group1, ...]`, with nil for
/// unmatched optional groups; nil when the string does not match at all.
fn match_builtin(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    _params: &[String],
    _body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult {
    let s = string_receiver("Match", &receiver)?;
    let args = eval_args(ev, args, scope)?;
    let Some(Value::Regex(re)) = args.first() else {
        return Err(wrong_arg_type("Match", "regex"));
    };
    match re.captures(s) {
        Some(captures) => {
            let groups: Vec<Value> = captures
                .iter()
                .map(|group| match group {
                    Some(m) => Value::string(m.as_str()),
                    None => Value::Nil,
                })
                .collect();
            Ok(Value::list(groups))
        }
        None => Ok(Value::Nil),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
