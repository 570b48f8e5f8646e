//! Vex Value - Runtime values for the vex invariant evaluator.
//!
//! This crate provides the dynamic value representation shared by the
//! evaluator and the constraint checker, together with the three value
//! subsystems everything else is built on:
//!
//! - `value`: the `Value` tagged union and the `Heap<T>` allocation wrapper
//! - `kind`: the semantic-kind classifier and its registry hook
//! - `numeric`: canonical `i64` / `u64` / `f64` extraction primitives
//! - `order`: the total-order comparator over the supported strata
//! - `errors`: the flat evaluator error type and its constructors
//!
//! # Ordering contract
//!
//! The comparator defines a total preorder across `Nil < Bool < Numeric <
//! String < Slice`. Within floats, `-Inf < finite < +Inf < NaN` and NaN
//! compares equal to NaN; this diverges from IEEE on purpose so that sort
//! and uniqueness are deterministic. Float-versus-integer comparison is
//! exact (performed in integer space), preserving transitivity past 2^53.

mod errors;
mod kind;
mod numeric;
mod order;
mod value;

pub use errors::{
    // Binary operation errors
    binary_type_mismatch, division_by_zero, integer_overflow, invalid_binary_op, modulo_by_zero,
    // Builtin contract errors
    body_not_allowed, body_required, duplicate_body, too_few_args, too_many_args,
    too_many_params, unknown_builtin, wrong_arg_type, wrong_receiver_type,
    // Evaluator errors
    args_outside_call, non_boolean_condition, non_boolean_operand, non_integer_index,
    undefined_variable, unknown_datatype, unknown_operation, wrong_operand_count,
    // Comparator and collection errors
    empty_sequence, unordered_types,
    EvalError, EvalResult,
};
pub use kind::{classify, Kind, KindHook};
pub use numeric::{
    get_float64, get_int64, get_int64_from_float, get_uint64, promote_to_float,
};
pub use order::{less, value_order};
pub use value::{CheckerFn, CheckerValue, Heap, Value};
