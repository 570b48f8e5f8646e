//! Flat evaluator errors.
//!
//! Everything the evaluator can fail with — unbound variables, operand type
//! mismatches, builtin contract violations, arithmetic faults — is a flat
//! message error. Construction goes through the `#[cold]` functions below so
//! call sites stay uniform and the messages stay consistent. The typed
//! constraint errors live in `vex_constraint`.

use thiserror::Error;

/// Result of evaluation.
pub type EvalResult = Result<crate::Value, EvalError>;

/// Evaluation error.
///
/// All evaluator errors are recoverable at the caller level; none are
/// fatal and none cause panics.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct EvalError {
    /// Error message.
    pub message: String,
}

impl EvalError {
    pub fn new(message: impl Into<String>) -> Self {
        EvalError {
            message: message.into(),
        }
    }
}

// Binary Operation Errors

/// Invalid operator for a specific type.
#[cold]
pub fn invalid_binary_op(op: &str, type_name: &str) -> EvalError {
    EvalError::new(format!("invalid operator `{op}` for {type_name}"))
}

/// Type mismatch in a binary operation.
#[cold]
pub fn binary_type_mismatch(op: &str, left: &str, right: &str) -> EvalError {
    EvalError::new(format!("cannot apply `{op}` to `{left}` and `{right}`"))
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new("division by zero")
}

/// Modulo by zero error.
#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::new("modulo by zero")
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::new(format!("integer overflow in {operation}"))
}

// Builtin Contract Errors

/// Unknown builtin name.
#[cold]
pub fn unknown_builtin(name: &str) -> EvalError {
    EvalError::new(format!("unknown builtin `{name}`"))
}

/// Too few positional arguments for a builtin.
#[cold]
pub fn too_few_args(display: &str, min: usize, actual: usize) -> EvalError {
    EvalError::new(format!(
        "{display} expects at least {min} argument(s), got {actual}"
    ))
}

/// Too many positional arguments for a builtin.
#[cold]
pub fn too_many_args(display: &str, max: usize, actual: usize) -> EvalError {
    EvalError::new(format!(
        "{display} expects at most {max} argument(s), got {actual}"
    ))
}

/// Too many lambda parameters for a builtin.
#[cold]
pub fn too_many_params(display: &str, max: usize, actual: usize) -> EvalError {
    EvalError::new(format!(
        "{display} accepts at most {max} parameter(s), got {actual}"
    ))
}

/// A lambda body was supplied to a builtin that takes none.
#[cold]
pub fn body_not_allowed(display: &str) -> EvalError {
    EvalError::new(format!("{display} does not take a body"))
}

/// A builtin that requires a lambda body was called without one.
#[cold]
pub fn body_required(display: &str) -> EvalError {
    EvalError::new(format!("{display} requires a body"))
}

/// Wrong receiver type for a builtin.
#[cold]
pub fn wrong_receiver_type(display: &str, expected: &str, actual: &str) -> EvalError {
    EvalError::new(format!(
        "{display} requires a {expected} receiver, got {actual}"
    ))
}

/// Wrong argument type for a builtin.
#[cold]
pub fn wrong_arg_type(display: &str, expected: &str) -> EvalError {
    EvalError::new(format!("{display} expects a {expected} argument"))
}

/// More than one lambda body in a single call.
#[cold]
pub fn duplicate_body(display: &str) -> EvalError {
    EvalError::new(format!("{display} given more than one body"))
}

// Evaluator Errors

/// Wrong operand count for an operator form.
#[cold]
pub fn wrong_operand_count(op: &str, expected: usize, actual: usize) -> EvalError {
    EvalError::new(format!(
        "`{op}` expects {expected} operand(s), got {actual}"
    ))
}

/// Unbound variable reference.
#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::new(format!("undefined variable `{name}`"))
}

/// Non-boolean operand in a logical operator.
#[cold]
pub fn non_boolean_operand(op: &str, type_name: &str) -> EvalError {
    EvalError::new(format!("`{op}` requires boolean operands, got {type_name}"))
}

/// Non-boolean condition in a ternary.
#[cold]
pub fn non_boolean_condition(type_name: &str) -> EvalError {
    EvalError::new(format!("condition must be boolean, got {type_name}"))
}

/// Non-integer index in an indexing expression.
#[cold]
pub fn non_integer_index(type_name: &str) -> EvalError {
    EvalError::new(format!("index must be an integer, got {type_name}"))
}

/// Unknown operation tag at the head of an s-expression.
#[cold]
pub fn unknown_operation(op: &str) -> EvalError {
    EvalError::new(format!("unknown operation `{op}`"))
}

/// Unknown datatype name in a datatype literal.
#[cold]
pub fn unknown_datatype(name: &str) -> EvalError {
    EvalError::new(format!("unknown datatype `{name}`"))
}

/// An embedded argument or parameter list evaluated outside a call.
#[cold]
pub fn args_outside_call() -> EvalError {
    EvalError::new("argument list outside of a call position")
}

// Comparator and Collection Errors

/// Unordered pair of types in the comparator.
#[cold]
pub fn unordered_types(left: &str, right: &str) -> EvalError {
    EvalError::new(format!("cannot order `{left}` and `{right}`"))
}

/// Empty-sequence fault for an operation that needs elements.
#[cold]
pub fn empty_sequence(operation: &str) -> EvalError {
    EvalError::new(format!("{operation} of empty sequence"))
}
