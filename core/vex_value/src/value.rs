//! Runtime values for the vex evaluator.
//!
//! # Heap Enforcement
//!
//! All heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a module-private constructor, so external code cannot build
//! heap values directly:
//!
//! ```text
//! let s = Value::string("hello");          // OK
//! let xs = Value::list(vec![]);            // OK
//! let s = Value::Str(Heap::new(...));      // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Thread Safety
//!
//! Heap values use `Arc` internally; every `Value` is `Send + Sync` and
//! cheap to clone. Values are immutable once surfaced to an operator.

mod heap;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, SecondsFormat};
use regex::Regex;
use rustc_hash::FxHashMap;
use uuid::Uuid;

pub use heap::Heap;

/// Type-checker predicate signature.
///
/// Checkers are first-class values produced from datatype literals and
/// constraint descriptors; `Ok(())` means the value satisfies the check,
/// `Err(message)` carries the human-readable failure.
pub type CheckerFn = Arc<dyn Fn(&Value) -> Result<(), String> + Send + Sync>;

/// A first-class type-checker predicate with a display name.
///
/// The name is what `TypeOf` and pattern-match diagnostics print; the
/// closure is what the `=~` operator invokes.
#[derive(Clone)]
pub struct CheckerValue {
    name: Heap<String>,
    check: CheckerFn,
}

impl CheckerValue {
    /// Create a checker from a display name and a predicate closure.
    pub fn new(
        name: impl Into<String>,
        check: impl Fn(&Value) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        CheckerValue {
            name: Heap::new(name.into()),
            check: Arc::new(check),
        }
    }

    /// The checker's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the predicate against a value.
    pub fn check(&self, value: &Value) -> Result<(), String> {
        (self.check)(value)
    }
}

impl fmt::Debug for CheckerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckerValue")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Runtime value in the vex evaluator.
#[derive(Clone, Debug)]
pub enum Value {
    /// Absent value.
    Nil,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (the canonical integer branch).
    Int(i64),
    /// Unsigned integer above `i64::MAX`; seen during comparison, never
    /// produced by coercion.
    Uint(u64),
    /// Floating-point value (the canonical float branch).
    Float(f64),

    // Heap Types (use Heap<T> for enforced Arc usage)
    /// String value.
    Str(Heap<String>),
    /// Deferred numeric literal with textual provenance (for example an
    /// arbitrary-precision JSON number). The classifier normalizes it.
    Number(Heap<String>),
    /// Compiled regular expression.
    Regex(Heap<Regex>),
    /// Sequence of values.
    List(Heap<Vec<Value>>),
    /// Mapping from string keys to values.
    Map(Heap<FxHashMap<String, Value>>),
    /// Typed float sequence (the canonical vector form).
    Vector(Heap<Vec<f64>>),

    // Domain Types
    /// Domain instant.
    Timestamp(DateTime<FixedOffset>),
    /// Domain identifier.
    Uuid(Uuid),
    /// Type-checker predicate.
    Checker(CheckerValue),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a deferred-number value from its textual form.
    #[inline]
    pub fn number(text: impl Into<String>) -> Self {
        Value::Number(Heap::new(text.into()))
    }

    /// Create a compiled-regex value.
    #[inline]
    pub fn regex(re: Regex) -> Self {
        Value::Regex(Heap::new(re))
    }

    /// Create a list value.
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value.
    #[inline]
    pub fn map(entries: FxHashMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Create a typed float vector.
    #[inline]
    pub fn vector(elements: Vec<f64>) -> Self {
        Value::Vector(Heap::new(elements))
    }

    /// Create a checker value.
    #[inline]
    pub fn checker(checker: CheckerValue) -> Self {
        Value::Checker(checker)
    }

    /// True when this value is nil.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    /// Canonical type name, used by `TypeOf` and diagnostics.
    ///
    /// `Uint` reports `int`: the unsigned branch is a comparison detail,
    /// not a distinct user-visible type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) | Value::Uint(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Number(_) => "number",
            Value::Regex(_) => "regex",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Vector(_) => "vector",
            Value::Timestamp(_) => "timestamp",
            Value::Uuid(_) => "uuid",
            Value::Checker(_) => "checker",
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for tests and diagnostics.
    ///
    /// Floats compare by IEEE semantics here (NaN != NaN); canonical
    /// ordering always goes through the comparator instead.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Regex(a), Value::Regex(b)) => a.as_str() == b.as_str(),
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => **a == **b,
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::Timestamp(a), Value::Timestamp(b)) => a == b,
            (Value::Uuid(a), Value::Uuid(b)) => a == b,
            (Value::Checker(a), Value::Checker(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Uint(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) | Value::Number(s) => write!(f, "{s}"),
            Value::Regex(re) => write!(f, "/{}/", re.as_str()),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                // Deterministic key order for diagnostics
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                write!(f, "{{")?;
                for (i, key) in keys.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {}", entries[*key])?;
                }
                write!(f, "}}")
            }
            Value::Vector(elements) => {
                write!(f, "[")?;
                for (i, x) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{x}")?;
                }
                write!(f, "]")
            }
            Value::Timestamp(ts) => {
                write!(f, "{}", ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Value::Uuid(id) => write!(f, "{id}"),
            Value::Checker(checker) => write!(f, "<checker {}>", checker.name()),
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
