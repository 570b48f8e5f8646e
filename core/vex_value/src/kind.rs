//! Semantic-kind classification.
//!
//! The classifier answers "what IS this value", never "what does a schema
//! want it to be". Deferred numbers are normalized here; lists of numbers
//! are recognized as vectors and coerced to the typed float form.

use tracing::trace;

use crate::numeric::promote_to_float;
use crate::value::Value;

/// Semantic kind of a runtime value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// No built-in kind applies (nil, maps, ambiguous empties, ...).
    Unspecified,
    /// String kind.
    String,
    /// Integer kind.
    Int,
    /// Float kind.
    Float,
    /// Boolean kind.
    Bool,
    /// Numeric-vector kind.
    Vector,
}

/// Registry hook for caller-defined kinds.
///
/// Consulted before built-in sequence handling; returning
/// `Kind::Unspecified` defers back to the built-in rules.
pub type KindHook = fn(&Value) -> Kind;

/// Classify a value, normalizing where classification implies a canonical
/// form.
///
/// Returns the kind together with the (possibly normalized) value:
/// deferred numbers come back as `Int` or `Float`, all-numeric lists come
/// back as typed vectors. Anything unrecognized returns
/// `Kind::Unspecified` with the original value.
pub fn classify(value: &Value, hook: Option<KindHook>) -> (Kind, Value) {
    match value {
        Value::Nil => (Kind::Unspecified, Value::Nil),
        Value::Number(text) => classify_number(text),
        Value::Bool(_) => (Kind::Bool, value.clone()),
        Value::Str(_) => (Kind::String, value.clone()),
        Value::Int(_) | Value::Uint(_) => (Kind::Int, value.clone()),
        Value::Float(_) => (Kind::Float, value.clone()),
        _ => {
            // Caller-defined kinds get first refusal on everything the
            // scalar rules did not claim; Unspecified defers back here.
            if let Some(hook) = hook {
                let kind = hook(value);
                if kind != Kind::Unspecified {
                    trace!(?kind, "kind hook claimed value");
                    return (kind, value.clone());
                }
            }
            classify_sequence(value)
        }
    }
}

/// Classify a deferred numeric literal by what it parses as.
///
/// An exponent-free whole parses as an integer; otherwise any finite float
/// form is a float. Unparsable text stays unspecified.
fn classify_number(text: &str) -> (Kind, Value) {
    if !text.contains(['.', 'e', 'E']) {
        if let Ok(n) = text.parse::<i64>() {
            return (Kind::Int, Value::Int(n));
        }
    }
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => (Kind::Float, Value::Float(f)),
        _ => (Kind::Unspecified, Value::number(text)),
    }
}

/// Built-in sequence rules.
fn classify_sequence(value: &Value) -> (Kind, Value) {
    match value {
        // The typed float sequence is a vector even when empty
        Value::Vector(_) => (Kind::Vector, value.clone()),
        Value::List(items) => {
            // An untyped empty sequence is genuinely ambiguous; schema
            // context downstream disambiguates
            if items.is_empty() {
                return (Kind::Unspecified, value.clone());
            }
            let mut elements = Vec::with_capacity(items.len());
            for item in items.iter() {
                match promote_to_float(item) {
                    Some(f) => elements.push(f),
                    // A non-numeric element short-circuits to the original
                    None => return (Kind::Unspecified, value.clone()),
                }
            }
            (Kind::Vector, Value::vector(elements))
        }
        _ => (Kind::Unspecified, value.clone()),
    }
}

#[cfg(test)]
mod tests;
