//! Value conformance checking.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use uuid::Uuid;

use vex_value::{get_float64, get_int64, get_int64_from_float, promote_to_float, Value};

use crate::descriptor::Constraint;
use crate::errors::{
    above_maximum, below_minimum, element_not_finite, element_not_numeric, fractional_float,
    not_finite, not_in_enum, out_of_int_range, pattern_mismatch, too_long, too_short, unparsable,
    unresolved_alias, wrong_dimension, wrong_kind, ValueError,
};

/// Check a value against a constraint.
///
/// Nil is always valid: required-ness is enforced outside the core.
pub fn check_value(value: &Value, constraint: &Constraint) -> Result<(), ValueError> {
    if value.is_nil() {
        return Ok(());
    }
    match constraint {
        Constraint::String { min_len, max_len } => check_string(value, *min_len, *max_len),
        Constraint::Integer { min, max } => check_integer(value, *min, *max),
        Constraint::Float { min, max } => check_float(value, *min, *max),
        Constraint::Boolean => match value {
            Value::Bool(_) => Ok(()),
            _ => Err(wrong_kind("boolean", value.type_name())),
        },
        Constraint::Timestamp { format } => check_timestamp(value, format.as_deref()),
        Constraint::Date => check_date(value),
        Constraint::Uuid => check_uuid(value),
        Constraint::Enum { values } => check_enum(value, values),
        Constraint::Pattern { patterns } => check_pattern(value, patterns),
        Constraint::Vector { dim } => check_vector(value, *dim),
        Constraint::Alias { name, resolved } => match resolved {
            Some(target) => check_value(value, target),
            None => Err(unresolved_alias(name)),
        },
    }
}

fn check_string(
    value: &Value,
    min_len: Option<usize>,
    max_len: Option<usize>,
) -> Result<(), ValueError> {
    let Value::Str(s) = value else {
        return Err(wrong_kind("string", value.type_name()));
    };
    // Bounds count runes, never bytes
    let len = s.chars().count();
    if let Some(min) = min_len {
        if len < min {
            return Err(too_short(len, min));
        }
    }
    if let Some(max) = max_len {
        if len > max {
            return Err(too_long(len, max));
        }
    }
    Ok(())
}

/// Integers accept any integer kind or a whole-number float.
///
/// Non-finite is a constraint failure ("not finite"), not a type error; a
/// fractional float is the wrong kind.
fn check_integer(value: &Value, min: Option<i64>, max: Option<i64>) -> Result<(), ValueError> {
    let n = if let Some(n) = get_int64(value) {
        n
    } else if let Value::Uint(u) = value {
        // Unsigned but beyond the canonical int64 range
        return Err(out_of_int_range(u));
    } else if let Some(normalized) = crate::coerce::normalize_deferred(value) {
        return check_integer(&normalized, min, max);
    } else {
        extract_int_from_float(value)?
    };
    if let Some(min) = min {
        if n < min {
            return Err(below_minimum(n, min));
        }
    }
    if let Some(max) = max {
        if n > max {
            return Err(above_maximum(n, max));
        }
    }
    Ok(())
}

fn extract_int_from_float(value: &Value) -> Result<i64, ValueError> {
    let Some(f) = get_float64(value) else {
        return Err(wrong_kind("integer", value.type_name()));
    };
    if !f.is_finite() {
        return Err(not_finite());
    }
    match get_int64_from_float(f) {
        Some(n) => Ok(n),
        None if f.trunc() == f => Err(out_of_int_range(f)),
        None => Err(fractional_float(f)),
    }
}

/// Floats accept any float or any integer, promoted; non-finite floats are
/// a constraint failure.
fn check_float(value: &Value, min: Option<f64>, max: Option<f64>) -> Result<(), ValueError> {
    let f = match promote_to_float(value) {
        Some(f) => f,
        None => match crate::coerce::normalize_deferred(value) {
            Some(normalized) => return check_float(&normalized, min, max),
            None => return Err(wrong_kind("float", value.type_name())),
        },
    };
    if !f.is_finite() {
        return Err(not_finite());
    }
    if let Some(min) = min {
        if f < min {
            return Err(below_minimum(f, min));
        }
    }
    if let Some(max) = max {
        if f > max {
            return Err(above_maximum(f, max));
        }
    }
    Ok(())
}

fn check_timestamp(value: &Value, format: Option<&str>) -> Result<(), ValueError> {
    match value {
        // A domain instant is accepted unconditionally
        Value::Timestamp(_) => Ok(()),
        Value::Str(s) => match parse_timestamp(s, format) {
            Some(_) => Ok(()),
            None => Err(unparsable("timestamp", s)),
        },
        _ => Err(wrong_kind("timestamp", value.type_name())),
    }
}

/// Parse a timestamp string: the custom format first when present, then
/// RFC-3339 (which admits optional fractional seconds).
pub(crate) fn parse_timestamp(s: &str, format: Option<&str>) -> Option<DateTime<FixedOffset>> {
    if let Some(fmt) = format {
        if let Ok(ts) = DateTime::parse_from_str(s, fmt) {
            return Some(ts);
        }
        // Custom formats without an offset parse as naive and assume UTC
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    DateTime::parse_from_rfc3339(s).ok()
}

fn check_date(value: &Value) -> Result<(), ValueError> {
    let Value::Str(s) = value else {
        return Err(wrong_kind("date string", value.type_name()));
    };
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(_) => Ok(()),
        Err(_) => Err(unparsable("date", s)),
    }
}

fn check_uuid(value: &Value) -> Result<(), ValueError> {
    match value {
        Value::Uuid(_) => Ok(()),
        Value::Str(s) => match Uuid::parse_str(s) {
            Ok(_) => Ok(()),
            Err(_) => Err(unparsable("uuid", s)),
        },
        _ => Err(wrong_kind("uuid", value.type_name())),
    }
}

fn check_enum(value: &Value, values: &[String]) -> Result<(), ValueError> {
    let Value::Str(s) = value else {
        return Err(wrong_kind("string", value.type_name()));
    };
    // Case-sensitive membership
    if values.iter().any(|v| v == s.as_str()) {
        Ok(())
    } else {
        Err(not_in_enum(s))
    }
}

fn check_pattern(value: &Value, patterns: &[regex::Regex]) -> Result<(), ValueError> {
    let Value::Str(s) = value else {
        return Err(wrong_kind("string", value.type_name()));
    };
    // The value must match every pattern
    for pattern in patterns {
        if !pattern.is_match(s) {
            return Err(pattern_mismatch(s, pattern.as_str()));
        }
    }
    Ok(())
}

fn check_vector(value: &Value, dim: usize) -> Result<(), ValueError> {
    match value {
        Value::Vector(elements) => {
            if elements.len() != dim {
                return Err(wrong_dimension(dim, elements.len()));
            }
            for (i, x) in elements.iter().enumerate() {
                if !x.is_finite() {
                    return Err(element_not_finite(i));
                }
            }
            Ok(())
        }
        Value::List(items) => {
            if items.len() != dim {
                return Err(wrong_dimension(dim, items.len()));
            }
            for (i, item) in items.iter().enumerate() {
                match promote_to_float(item) {
                    Some(x) if x.is_finite() => {}
                    Some(_) => return Err(element_not_finite(i)),
                    None => return Err(element_not_numeric(i, item.type_name())),
                }
            }
            Ok(())
        }
        _ => Err(wrong_kind("vector", value.type_name())),
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
