//! Canonical numeric extraction primitives.
//!
//! Each primitive answers "is this value that kind of number, and what is
//! its canonical form" without panicking on foreign shapes: `None` means
//! "not this kind" and the caller proceeds to the next candidate.

use crate::value::Value;

/// Upper bound of the `i64` range in float space.
///
/// `i64::MAX as f64` rounds up to 2^63, so the *exclusive* float bound for
/// a safe cast is exactly 2^63.
pub(crate) const INT64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Lower bound of the `i64` range in float space (`i64::MIN` is a power of
/// two and exactly representable).
pub(crate) const INT64_LOWER: f64 = -9_223_372_036_854_775_808.0;

/// Upper bound of the `u64` range in float space (exclusive), 2^64.
pub(crate) const UINT64_UPPER: f64 = 18_446_744_073_709_551_616.0;

/// Extract a canonical `i64` from an integer value.
///
/// Accepts the signed branch directly and the unsigned branch when it fits;
/// unsigned values above `i64::MAX` are rejected rather than silently
/// wrapped. Floats, strings, booleans, and nil are not this kind.
#[inline]
pub fn get_int64(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Uint(n) => i64::try_from(*n).ok(),
        _ => None,
    }
}

/// Extract a canonical `u64` from the unsigned branch only. No narrowing.
#[inline]
pub fn get_uint64(value: &Value) -> Option<u64> {
    match value {
        Value::Uint(n) => Some(*n),
        _ => None,
    }
}

/// Extract a canonical `f64` from the float branch only.
#[inline]
pub fn get_float64(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

/// Convert a float to `i64` exactly.
///
/// Succeeds iff the float is finite, has no fractional part, and lies in
/// `[i64::MIN, 2^63)`. The upper bound is exclusive: `i64::MAX as f64`
/// rounds up to 2^63, so the largest safely castable float is one ULP
/// below it.
#[inline]
pub fn get_int64_from_float(f: f64) -> Option<i64> {
    if !f.is_finite() || f.trunc() != f {
        return None;
    }
    if !(INT64_LOWER..INT64_UPPER).contains(&f) {
        return None;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "range and fraction checked above"
    )]
    let n = f as i64;
    Some(n)
}

/// Promote any numeric branch to `f64`.
///
/// Used by the classifier's vector promotion and by float-target coercion
/// of sequence elements. Precision loss beyond 2^53 is permitted here; the
/// comparator never takes this path.
#[inline]
pub fn promote_to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Float(f) => Some(*f),
        #[expect(clippy::cast_precision_loss, reason = "documented promotion")]
        Value::Int(n) => Some(*n as f64),
        #[expect(clippy::cast_precision_loss, reason = "documented promotion")]
        Value::Uint(n) => Some(*n as f64),
        _ => None,
    }
}
