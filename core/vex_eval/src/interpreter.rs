//! Expression evaluator.
//!
//! A single recursive dispatch over the four node variants. Special forms
//! control the evaluation of their own children; strict operators receive
//! operands pre-evaluated, left to right. Builtin calls — function-style
//! and method-style alike — are assembled by one shape-recognition helper
//! and pass through one validation gate, so no call form can bypass the
//! arity contract.

use std::sync::Arc;

use tracing::trace;

use vex_constraint::{
    is_boolean, is_date, is_float, is_integer, is_string, is_timestamp, is_uuid,
};
use vex_ir::{Expr, Literal};
use vex_value::{
    args_outside_call, body_not_allowed, body_required, classify, duplicate_body, get_int64,
    non_boolean_condition, non_boolean_operand, non_integer_index, too_few_args, too_many_args,
    too_many_params, undefined_variable, unknown_builtin, unknown_datatype, unknown_operation,
    wrong_operand_count, wrong_receiver_type, EvalError, EvalResult, Kind, KindHook, Value,
};

use crate::operators::{evaluate_binary, evaluate_unary, is_binary};
use crate::registry::{global, BuiltinDef, BuiltinRegistry};
use crate::scope::{fold_get, Scope};

/// The expression evaluator.
///
/// Holds no per-evaluation state: one instance can evaluate many
/// expressions, concurrently, against different scopes.
pub struct Evaluator {
    registry: Arc<BuiltinRegistry>,
    hook: Option<KindHook>,
}

impl Evaluator {
    /// Evaluator over the standard builtin registry, no kind hook.
    pub fn new() -> Self {
        Evaluator {
            registry: global(),
            hook: None,
        }
    }

    /// Start building a customized evaluator.
    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    /// Classify a value through this evaluator's kind hook.
    ///
    /// This is the blessed entry point for caller-defined kinds: property
    /// reads normalize deferred numbers through it, and callers can use it
    /// to normalize wrapped values before comparison.
    pub fn classify(&self, value: &Value) -> (Kind, Value) {
        classify(value, self.hook)
    }

    /// Evaluate an expression against a scope.
    pub fn evaluate(&self, expr: &Expr, scope: &Scope) -> EvalResult {
        match expr {
            Expr::Literal(literal) => literal_value(literal),
            Expr::OpTag(tag) => Ok(Value::string(tag.clone())),
            Expr::Datatype(name) => datatype_checker(name),
            Expr::SExpr { op, children } => self.evaluate_sexpr(op, children, scope),
        }
    }

    /// Evaluate to a boolean verdict: nil coerces to false, any other
    /// non-boolean value is an error.
    pub fn evaluate_bool(&self, expr: &Expr, scope: &Scope) -> Result<bool, EvalError> {
        match self.evaluate(expr, scope)? {
            Value::Nil => Ok(false),
            Value::Bool(b) => Ok(b),
            other => Err(non_boolean_condition(other.type_name())),
        }
    }

    fn evaluate_sexpr(&self, op: &str, children: &[Expr], scope: &Scope) -> EvalResult {
        trace!(op, "evaluating s-expression");
        match op {
            "&&" => self.eval_and(children, scope),
            "||" => self.eval_or(children, scope),
            "?" => self.eval_ternary(children, scope),
            "$" => self.eval_var(children, scope),
            "p" => self.eval_prop(children, scope),
            "." => self.eval_member(children, scope),
            "@" => self.eval_index(children, scope),
            "[]" => self.eval_list(children, scope),
            "!" => {
                require_operands(op, 1, children)?;
                let operand = self.evaluate(&children[0], scope)?;
                evaluate_unary(op, operand)
            }
            "-" if children.len() == 1 => {
                let operand = self.evaluate(&children[0], scope)?;
                evaluate_unary(op, operand)
            }
            _ if is_binary(op) => {
                require_operands(op, 2, children)?;
                let left = self.evaluate(&children[0], scope)?;
                let right = self.evaluate(&children[1], scope)?;
                evaluate_binary(op, left, right)
            }
            _ => self.eval_call(op, children, scope),
        }
    }

    // Special Forms

    /// `&&`: left to right, short-circuits on the first false. Boolean
    /// operands required; the short-circuited operand is never evaluated,
    /// so errors in it are never masked — they simply do not occur.
    fn eval_and(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        for child in children {
            let value = self.evaluate(child, scope)?;
            match value {
                Value::Bool(true) => {}
                Value::Bool(false) => return Ok(Value::Bool(false)),
                other => return Err(non_boolean_operand("&&", other.type_name())),
            }
        }
        Ok(Value::Bool(true))
    }

    /// `||`: left to right, short-circuits on the first true.
    fn eval_or(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        for child in children {
            let value = self.evaluate(child, scope)?;
            match value {
                Value::Bool(false) => {}
                Value::Bool(true) => return Ok(Value::Bool(true)),
                other => return Err(non_boolean_operand("||", other.type_name())),
            }
        }
        Ok(Value::Bool(false))
    }

    /// `?`: boolean condition, one branch evaluated.
    fn eval_ternary(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        require_operands("?", 3, children)?;
        let condition = self.evaluate(&children[0], scope)?;
        match condition {
            Value::Bool(true) => self.evaluate(&children[1], scope),
            Value::Bool(false) => self.evaluate(&children[2], scope),
            other => Err(non_boolean_condition(other.type_name())),
        }
    }

    /// `$`: variable lookup. Purely numeric names are implicit lambda
    /// parameters and read as nil when unbound; all other unbound names
    /// are errors.
    fn eval_var(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        let Some(name) = children.first().and_then(literal_name) else {
            return Err(EvalError::new("`$` requires a literal variable name"));
        };
        match scope.lookup(name) {
            Some(value) => Ok(value),
            None if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(Value::Nil)
            }
            None => Err(undefined_variable(name)),
        }
    }

    /// `p`: property lookup with case folding; a missing property reads
    /// as nil so `prop then ...` and `prop lest ...` compose. Deferred
    /// numbers normalize through the classifier on the way out.
    fn eval_prop(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        let Some(name) = children.first().and_then(literal_name) else {
            return Err(EvalError::new("`p` requires a literal property name"));
        };
        match scope.lookup_fold(name) {
            Some(value @ Value::Number(_)) => Ok(self.classify(&value).1),
            Some(value) => Ok(value),
            None => Ok(Value::Nil),
        }
    }

    /// `.`: member access. Two operands name a field or a zero-argument
    /// builtin; more operands carry args, params, and body. Builtin names
    /// win over map keys; on a map, an unknown two-operand name falls
    /// through to a case-folding key lookup.
    fn eval_member(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        if children.len() < 2 {
            return Err(wrong_operand_count(".", 2, children.len()));
        }
        let Some(name) = literal_name(&children[1]) else {
            return Err(EvalError::new("`.` requires a literal member name"));
        };
        let receiver = self.evaluate(&children[0], scope)?;
        match self.registry.lookup(name) {
            Some(def) => {
                let parts = assemble_parts(def.name, &children[2..])?;
                self.invoke(def, receiver, &parts, scope)
            }
            None => match &receiver {
                Value::Map(entries) if children.len() == 2 => {
                    Ok(fold_get(entries, name).unwrap_or(Value::Nil))
                }
                _ => Err(unknown_builtin(name)),
            },
        }
    }

    /// `@`: indexing. Nil receivers, negative indices, and out-of-range
    /// indices read as nil; a non-integer index is an error. Strings
    /// index by rune.
    fn eval_index(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        require_operands("@", 2, children)?;
        let receiver = self.evaluate(&children[0], scope)?;
        let index = self.evaluate(&children[1], scope)?;
        if receiver.is_nil() {
            return Ok(Value::Nil);
        }
        if let Value::Map(entries) = &receiver {
            let Value::Str(key) = &index else {
                return Err(EvalError::new("map index must be a string"));
            };
            return Ok(entries.get(key.as_str()).cloned().unwrap_or(Value::Nil));
        }
        let Some(i) = get_int64(&index) else {
            return Err(non_integer_index(index.type_name()));
        };
        let Ok(idx) = usize::try_from(i) else {
            return Ok(Value::Nil);
        };
        match &receiver {
            Value::List(items) => Ok(items.get(idx).cloned().unwrap_or(Value::Nil)),
            Value::Vector(elements) => {
                Ok(elements.get(idx).map(|x| Value::Float(*x)).unwrap_or(Value::Nil))
            }
            Value::Str(s) => Ok(s
                .chars()
                .nth(idx)
                .map(Value::string)
                .unwrap_or(Value::Nil)),
            other => Err(wrong_receiver_type(
                "@",
                "sequence, string, or map",
                other.type_name(),
            )),
        }
    }

    /// `[]`: list construction, children evaluated in order.
    fn eval_list(&self, children: &[Expr], scope: &Scope) -> EvalResult {
        let mut items = Vec::with_capacity(children.len());
        for child in children {
            items.push(self.evaluate(child, scope)?);
        }
        Ok(Value::list(items))
    }

    // Builtin Calls

    /// Function-call form: the head tag names the builtin, the first
    /// child is the receiver.
    fn eval_call(&self, op: &str, children: &[Expr], scope: &Scope) -> EvalResult {
        let Some(def) = self.registry.lookup(op) else {
            return Err(unknown_operation(op));
        };
        let Some((receiver_expr, rest)) = children.split_first() else {
            return Err(wrong_operand_count(op, 1, 0));
        };
        let parts = assemble_parts(def.name, rest)?;
        let receiver = self.evaluate(receiver_expr, scope)?;
        self.invoke(def, receiver, &parts, scope)
    }

    /// The single builtin call site: every call form funnels through this
    /// gate before the implementation runs, and validation always
    /// precedes lambda evaluation.
    fn invoke(
        &self,
        def: &BuiltinDef,
        receiver: Value,
        parts: &CallParts<'_>,
        scope: &Scope,
    ) -> EvalResult {
        validate_call(def, parts.args.len(), parts.params.len(), parts.body.is_some())?;
        trace!(name = def.name, "invoking builtin");
        (def.func)(self, receiver, parts.args, parts.params, parts.body, scope)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

/// Builder for evaluators with a custom registry or kind hook.
#[derive(Default)]
pub struct EvaluatorBuilder {
    registry: Option<Arc<BuiltinRegistry>>,
    hook: Option<KindHook>,
}

impl EvaluatorBuilder {
    /// Use a custom builtin registry instead of the standard one.
    #[must_use]
    pub fn with_registry(mut self, registry: BuiltinRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Install a kind-registry hook for caller-defined kinds.
    #[must_use]
    pub fn with_kind_hook(mut self, hook: KindHook) -> Self {
        self.hook = Some(hook);
        self
    }

    /// Finish building.
    pub fn build(self) -> Evaluator {
        Evaluator {
            registry: self.registry.unwrap_or_else(global),
            hook: self.hook,
        }
    }
}

// Node Helpers

/// A literal node yields its stored payload; the embedded call shapes
/// never evaluate on their own.
fn literal_value(literal: &Literal) -> EvalResult {
    match literal {
        Literal::Nil => Ok(Value::Nil),
        Literal::Bool(b) => Ok(Value::Bool(*b)),
        Literal::Int(n) => Ok(Value::Int(*n)),
        Literal::Float(f) => Ok(Value::Float(*f)),
        Literal::Str(s) => Ok(Value::string(s.clone())),
        Literal::Regex(re) => Ok(Value::regex(re.clone())),
        Literal::Args(_) | Literal::Params(_) => Err(args_outside_call()),
    }
}

/// A datatype literal yields the matching type-checker predicate.
fn datatype_checker(name: &str) -> EvalResult {
    let checker = match name {
        "string" => is_string(),
        "int" | "integer" => is_integer(),
        "float" => is_float(),
        "bool" | "boolean" => is_boolean(),
        "uuid" => is_uuid(),
        "timestamp" => is_timestamp(),
        "date" => is_date(),
        _ => return Err(unknown_datatype(name)),
    };
    Ok(Value::checker(checker))
}

/// Literal member/variable name: a string literal or an operator tag in
/// operand position.
fn literal_name(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::Literal(Literal::Str(s)) => Some(s),
        Expr::OpTag(tag) => Some(tag),
        _ => None,
    }
}

fn require_operands(op: &str, expected: usize, children: &[Expr]) -> Result<(), EvalError> {
    if children.len() == expected {
        Ok(())
    } else {
        Err(wrong_operand_count(op, expected, children.len()))
    }
}

// Call Assembly

/// The disassembled extras of a builtin call.
struct CallParts<'a> {
    args: &'a [Expr],
    params: &'a [String],
    body: Option<&'a Expr>,
}

/// Recognize args, params, and body among a call's extra children by
/// their literal shape, in any order. A literal-nil body normalizes to
/// absent so body-presence validation stays correct.
fn assemble_parts<'a>(display: &str, rest: &'a [Expr]) -> Result<CallParts<'a>, EvalError> {
    let mut args: &[Expr] = &[];
    let mut params: &[String] = &[];
    let mut body: Option<&Expr> = None;
    for child in rest {
        match child {
            Expr::Literal(Literal::Args(list)) => args = list,
            Expr::Literal(Literal::Params(names)) => params = names,
            other if other.is_nil_literal() => {}
            other => {
                if body.is_some() {
                    return Err(duplicate_body(display));
                }
                body = Some(other);
            }
        }
    }
    Ok(CallParts { args, params, body })
}

/// Verify a call against a builtin's contract exactly once.
fn validate_call(
    def: &BuiltinDef,
    args: usize,
    params: usize,
    has_body: bool,
) -> Result<(), EvalError> {
    if args < def.min_args {
        return Err(too_few_args(def.name, def.min_args, args));
    }
    if let Some(max) = def.max_args {
        if args > max {
            return Err(too_many_args(def.name, max, args));
        }
    }
    if params > def.max_params {
        return Err(too_many_params(def.name, def.max_params, params));
    }
    match (has_body, def.accept_body) {
        (true, false) => Err(body_not_allowed(def.name)),
        (false, true) => Err(body_required(def.name)),
        _ => Ok(()),
    }
}
