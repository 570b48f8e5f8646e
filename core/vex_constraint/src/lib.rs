//! Vex Constraint - value conformance for the vex schema core.
//!
//! A constraint descriptor says what a property's values must look like;
//! this crate checks concrete values against descriptors and coerces them
//! to the canonical representation (`i64` for integers, `f64` for floats
//! and vector elements, untouched for everything else).
//!
//! # Error taxonomy
//!
//! Every failure carries a [`ValueErrorKind`] tag:
//!
//! - `TypeMismatch`: the value's kind is wrong for the constraint
//! - `ConstraintFail`: the kind is right but a bound, pattern, enum,
//!   dimension, or finiteness requirement is violated
//!
//! Downstream diagnostics bucket on the tag without re-parsing messages.

mod check;
mod coerce;
mod descriptor;
mod errors;
mod predicates;

pub use check::check_value;
pub use coerce::coerce_value;
pub use descriptor::{Constraint, ConstraintKind};
pub use errors::{
    above_maximum, below_minimum, element_not_finite, element_not_numeric, fractional_float,
    not_finite, not_in_enum, out_of_int_range, pattern_mismatch, too_long, too_short, unparsable,
    unresolved_alias, wrong_dimension, wrong_kind, ValueError, ValueErrorKind,
};
pub use predicates::{
    checker_for, in_enum, is_boolean, is_date, is_float, is_integer, is_string, is_timestamp,
    is_uuid, matches_pattern,
};
