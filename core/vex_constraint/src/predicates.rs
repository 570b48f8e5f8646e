//! First-class checker predicates.
//!
//! Each predicate wraps conformance checking in a [`CheckerValue`] so the
//! `=~` operator and datatype literals can use constraints as values. The
//! closure returns the failure message verbatim; callers that only need a
//! verdict discard it.

use regex::Regex;

use vex_value::{CheckerValue, Value};

use crate::check::check_value;
use crate::descriptor::Constraint;

/// Wrap a constraint as a checker named after its kind.
pub fn checker_for(constraint: Constraint) -> CheckerValue {
    let name = constraint.kind().name();
    from_constraint(name, constraint)
}

fn from_constraint(name: &str, constraint: Constraint) -> CheckerValue {
    CheckerValue::new(name, move |value: &Value| {
        check_value(value, &constraint).map_err(|e| e.message)
    })
}

/// String values.
pub fn is_string() -> CheckerValue {
    from_constraint(
        "string",
        Constraint::String {
            min_len: None,
            max_len: None,
        },
    )
}

/// Integer values, including whole-number floats.
pub fn is_integer() -> CheckerValue {
    from_constraint(
        "integer",
        Constraint::Integer {
            min: None,
            max: None,
        },
    )
}

/// Float values, including promoted integers.
pub fn is_float() -> CheckerValue {
    from_constraint(
        "float",
        Constraint::Float {
            min: None,
            max: None,
        },
    )
}

/// Boolean values.
pub fn is_boolean() -> CheckerValue {
    from_constraint("boolean", Constraint::Boolean)
}

/// UUID values or UUID strings.
pub fn is_uuid() -> CheckerValue {
    from_constraint("uuid", Constraint::Uuid)
}

/// Timestamp values or RFC-3339 strings.
pub fn is_timestamp() -> CheckerValue {
    from_constraint("timestamp", Constraint::Timestamp { format: None })
}

/// `YYYY-MM-DD` date strings.
pub fn is_date() -> CheckerValue {
    from_constraint("date", Constraint::Date)
}

/// Strings matching the given pattern.
pub fn matches_pattern(pattern: Regex) -> CheckerValue {
    from_constraint(
        "pattern",
        Constraint::Pattern {
            patterns: vec![pattern],
        },
    )
}

/// Strings drawn from the given set, case-sensitively.
pub fn in_enum(values: Vec<String>) -> CheckerValue {
    from_constraint("enum", Constraint::Enum { values })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
