//! Constraint descriptors.
//!
//! Descriptors arrive from the schema loader already built; the core only
//! reads them. An alias may be handed over before its target is resolved;
//! checking an unresolved alias is a constraint failure, not a panic.

use std::sync::Arc;

use regex::Regex;

/// Discriminant of a constraint descriptor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConstraintKind {
    String,
    Integer,
    Float,
    Boolean,
    Timestamp,
    Date,
    Uuid,
    Enum,
    Pattern,
    Vector,
    Alias,
}

impl ConstraintKind {
    /// Lowercase display name used in messages and checker predicates.
    pub fn name(self) -> &'static str {
        match self {
            ConstraintKind::String => "string",
            ConstraintKind::Integer => "integer",
            ConstraintKind::Float => "float",
            ConstraintKind::Boolean => "boolean",
            ConstraintKind::Timestamp => "timestamp",
            ConstraintKind::Date => "date",
            ConstraintKind::Uuid => "uuid",
            ConstraintKind::Enum => "enum",
            ConstraintKind::Pattern => "pattern",
            ConstraintKind::Vector => "vector",
            ConstraintKind::Alias => "alias",
        }
    }
}

/// A constraint on the values of one property.
#[derive(Clone, Debug)]
pub enum Constraint {
    /// String with optional length bounds, counted in runes.
    String {
        min_len: Option<usize>,
        max_len: Option<usize>,
    },
    /// Integer with optional inclusive bounds.
    Integer { min: Option<i64>, max: Option<i64> },
    /// Float with optional inclusive bounds.
    Float { min: Option<f64>, max: Option<f64> },
    /// Boolean, exact type match.
    Boolean,
    /// Timestamp; strings parse against the custom format when present,
    /// then RFC-3339 with optional fractional seconds.
    Timestamp { format: Option<String> },
    /// Date string of form `YYYY-MM-DD`.
    Date,
    /// UUID value or UUID string.
    Uuid,
    /// Ordered set of permitted strings, matched case-sensitively.
    Enum { values: Vec<String> },
    /// The value must match every pattern.
    Pattern { patterns: Vec<Regex> },
    /// Numeric vector of an exact positive dimension.
    Vector { dim: usize },
    /// Named alias for another constraint; `resolved` may still be empty
    /// when the loader has not tied the knot yet.
    Alias {
        name: String,
        resolved: Option<Arc<Constraint>>,
    },
}

impl Constraint {
    /// The descriptor's discriminant.
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::String { .. } => ConstraintKind::String,
            Constraint::Integer { .. } => ConstraintKind::Integer,
            Constraint::Float { .. } => ConstraintKind::Float,
            Constraint::Boolean => ConstraintKind::Boolean,
            Constraint::Timestamp { .. } => ConstraintKind::Timestamp,
            Constraint::Date => ConstraintKind::Date,
            Constraint::Uuid => ConstraintKind::Uuid,
            Constraint::Enum { .. } => ConstraintKind::Enum,
            Constraint::Pattern { .. } => ConstraintKind::Pattern,
            Constraint::Vector { .. } => ConstraintKind::Vector,
            Constraint::Alias { .. } => ConstraintKind::Alias,
        }
    }
}
