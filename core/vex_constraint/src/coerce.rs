//! Canonical coercion.
//!
//! Coercion produces the canonical form a checked value is stored and
//! compared in: `i64` for integer targets, `f64` for float targets, the
//! typed float vector for vector targets. Every other target's canonical
//! form equals its input form.

use vex_value::{
    classify, get_float64, get_int64, get_int64_from_float, promote_to_float, Kind, Value,
};

use crate::descriptor::Constraint;
use crate::errors::{
    element_not_finite, element_not_numeric, fractional_float, not_finite, out_of_int_range,
    unresolved_alias, wrong_kind, ValueError,
};

/// Coerce a value to the canonical form of a constraint.
///
/// Nil passes through: required-ness is enforced outside the core.
pub fn coerce_value(value: &Value, constraint: &Constraint) -> Result<Value, ValueError> {
    if value.is_nil() {
        return Ok(Value::Nil);
    }
    match constraint {
        Constraint::Integer { .. } => coerce_integer(value),
        Constraint::Float { .. } => coerce_float(value),
        Constraint::Vector { .. } => coerce_vector(value),
        Constraint::Alias { name, resolved } => match resolved {
            Some(target) => coerce_value(value, target),
            None => Err(unresolved_alias(name)),
        },
        _ => Ok(value.clone()),
    }
}

/// Integer target: integer kinds directly, whole finite floats exactly.
fn coerce_integer(value: &Value) -> Result<Value, ValueError> {
    if let Some(n) = get_int64(value) {
        return Ok(Value::Int(n));
    }
    if let Value::Uint(u) = value {
        // Unsigned but beyond the canonical int64 range
        return Err(out_of_int_range(u));
    }
    if let Some(f) = get_float64(value) {
        if !f.is_finite() {
            return Err(not_finite());
        }
        return match get_int64_from_float(f) {
            Some(n) => Ok(Value::Int(n)),
            None if f.trunc() == f => Err(out_of_int_range(f)),
            None => Err(fractional_float(f)),
        };
    }
    if let Some(normalized) = normalize_deferred(value) {
        return coerce_integer(&normalized);
    }
    Err(wrong_kind("integer", value.type_name()))
}

/// Float target: floats widen, integers promote; non-finite is rejected.
fn coerce_float(value: &Value) -> Result<Value, ValueError> {
    if let Some(f) = get_float64(value) {
        if !f.is_finite() {
            return Err(not_finite());
        }
        return Ok(Value::Float(f));
    }
    if let Some(n) = get_int64(value) {
        #[expect(clippy::cast_precision_loss, reason = "documented promotion")]
        let f = n as f64;
        return Ok(Value::Float(f));
    }
    if let Some(normalized) = normalize_deferred(value) {
        return coerce_float(&normalized);
    }
    Err(wrong_kind("float", value.type_name()))
}

/// Route a deferred number through the classifier; `None` when the value
/// is not deferred or stays unspecified (preventing a retry loop).
pub(crate) fn normalize_deferred(value: &Value) -> Option<Value> {
    if !matches!(value, Value::Number(_)) {
        return None;
    }
    match classify(value, None) {
        (Kind::Unspecified, _) => None,
        (_, normalized) => Some(normalized),
    }
}

/// Vector target: every element coerces as a finite float.
fn coerce_vector(value: &Value) -> Result<Value, ValueError> {
    match value {
        Value::Vector(elements) => {
            for (i, x) in elements.iter().enumerate() {
                if !x.is_finite() {
                    return Err(element_not_finite(i));
                }
            }
            Ok(value.clone())
        }
        Value::List(items) => {
            let mut elements = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match promote_to_float(item) {
                    Some(x) if x.is_finite() => elements.push(x),
                    Some(_) => return Err(element_not_finite(i)),
                    None => return Err(element_not_numeric(i, item.type_name())),
                }
            }
            Ok(Value::vector(elements))
        }
        _ => Err(wrong_kind("vector", value.type_name())),
    }
}
