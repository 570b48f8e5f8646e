//! Typed constraint errors.
//!
//! Construction goes through the `#[cold]` functions below so that the
//! type-versus-constraint classification is decided exactly once, at the
//! place that knows.

use thiserror::Error;

/// Which tier of conformance failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueErrorKind {
    /// The value's kind is wrong for the constraint.
    TypeMismatch,
    /// The kind is right but the value violates a bound, pattern, enum,
    /// dimension, or finiteness requirement.
    ConstraintFail,
}

/// A conformance failure with its classification tag.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct ValueError {
    /// Classification tag.
    pub kind: ValueErrorKind,
    /// Human-readable message.
    pub message: String,
}

impl ValueError {
    /// Create a type-mismatch error.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        ValueError {
            kind: ValueErrorKind::TypeMismatch,
            message: message.into(),
        }
    }

    /// Create a constraint-failure error.
    pub fn constraint_fail(message: impl Into<String>) -> Self {
        ValueError {
            kind: ValueErrorKind::ConstraintFail,
            message: message.into(),
        }
    }

    /// True for the type-mismatch tier.
    #[inline]
    pub fn is_type_mismatch(&self) -> bool {
        self.kind == ValueErrorKind::TypeMismatch
    }

    /// True for the constraint-failure tier.
    #[inline]
    pub fn is_constraint_fail(&self) -> bool {
        self.kind == ValueErrorKind::ConstraintFail
    }
}

// Type Mismatches

/// The value is a different kind than the constraint expects.
#[cold]
pub fn wrong_kind(expected: &str, actual: &str) -> ValueError {
    ValueError::type_mismatch(format!("expected {expected}, got {actual}"))
}

/// A fractional float where an integer is expected.
#[cold]
pub fn fractional_float(value: f64) -> ValueError {
    ValueError::type_mismatch(format!("expected integer, got fractional float {value}"))
}

// Constraint Failures

/// Non-finite float where a finite number is required.
#[cold]
pub fn not_finite() -> ValueError {
    ValueError::constraint_fail("value is not finite")
}

/// A whole number outside the `i64` range.
#[cold]
pub fn out_of_int_range(value: impl std::fmt::Display) -> ValueError {
    ValueError::constraint_fail(format!("{value} is out of integer range"))
}

/// Value below the inclusive minimum.
#[cold]
pub fn below_minimum(value: impl std::fmt::Display, min: impl std::fmt::Display) -> ValueError {
    ValueError::constraint_fail(format!("{value} is below the minimum {min}"))
}

/// Value above the inclusive maximum.
#[cold]
pub fn above_maximum(value: impl std::fmt::Display, max: impl std::fmt::Display) -> ValueError {
    ValueError::constraint_fail(format!("{value} is above the maximum {max}"))
}

/// String shorter than the minimum rune count.
#[cold]
pub fn too_short(len: usize, min: usize) -> ValueError {
    ValueError::constraint_fail(format!("length {len} is below the minimum {min}"))
}

/// String longer than the maximum rune count.
#[cold]
pub fn too_long(len: usize, max: usize) -> ValueError {
    ValueError::constraint_fail(format!("length {len} is above the maximum {max}"))
}

/// String not a member of the enum set.
#[cold]
pub fn not_in_enum(value: &str) -> ValueError {
    ValueError::constraint_fail(format!("{value:?} is not a permitted value"))
}

/// String fails one of the patterns.
#[cold]
pub fn pattern_mismatch(value: &str, pattern: &str) -> ValueError {
    ValueError::constraint_fail(format!("{value:?} does not match pattern /{pattern}/"))
}

/// Sequence length differs from the vector dimension.
#[cold]
pub fn wrong_dimension(expected: usize, actual: usize) -> ValueError {
    ValueError::constraint_fail(format!("expected dimension {expected}, got {actual}"))
}

/// Vector element is not numeric.
#[cold]
pub fn element_not_numeric(index: usize, type_name: &str) -> ValueError {
    ValueError::constraint_fail(format!("element [{index}] is not numeric, got {type_name}"))
}

/// Vector element is not finite.
#[cold]
pub fn element_not_finite(index: usize) -> ValueError {
    ValueError::constraint_fail(format!("element [{index}] is not finite"))
}

/// A string that does not parse as the constrained domain type.
#[cold]
pub fn unparsable(what: &str, value: &str) -> ValueError {
    ValueError::constraint_fail(format!("{value:?} is not a valid {what}"))
}

/// Alias whose target was never resolved.
#[cold]
pub fn unresolved_alias(name: &str) -> ValueError {
    ValueError::constraint_fail(format!("unresolved alias: {name}"))
}
