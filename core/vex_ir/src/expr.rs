//! Expression tree nodes.
//!
//! The tree is a small s-expression form: an operator tag at the head of a
//! node, zero or more child expressions behind it. Builtin calls embed their
//! argument and parameter lists as literal payloads so that call assembly
//! needs no separate AST layer.

use std::fmt;

use regex::Regex;

/// Literal payload of an expression node.
///
/// Besides the scalar forms, two embedded shapes exist purely for call
/// assembly: `Args` carries unevaluated argument subtrees and `Params`
/// carries lambda parameter names. Both are recognized structurally when a
/// builtin call is put together.
#[derive(Clone, Debug)]
pub enum Literal {
    /// Absent value.
    Nil,
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Int(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    Str(String),
    /// Regular expression literal, compiled at tree-construction time.
    Regex(Regex),
    /// Embedded argument list for a builtin call (subtrees, unevaluated).
    Args(Vec<Expr>),
    /// Embedded lambda parameter names for a builtin call.
    Params(Vec<String>),
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Nil, Literal::Nil) => true,
            (Literal::Bool(a), Literal::Bool(b)) => a == b,
            (Literal::Int(a), Literal::Int(b)) => a == b,
            (Literal::Float(a), Literal::Float(b)) => a == b,
            (Literal::Str(a), Literal::Str(b)) => a == b,
            // Compiled regexes compare by source text
            (Literal::Regex(a), Literal::Regex(b)) => a.as_str() == b.as_str(),
            (Literal::Args(a), Literal::Args(b)) => a == b,
            (Literal::Params(a), Literal::Params(b)) => a == b,
            _ => false,
        }
    }
}

/// Expression node.
///
/// The four variants of the evaluation contract:
///
/// - `Literal`: yields its stored payload unchanged
/// - `OpTag`: an operator symbol in non-head position, yields the tag text
/// - `Datatype`: a primitive type name, yields a type-checker predicate
/// - `SExpr`: an operator tag applied to child expressions
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Literal value.
    Literal(Literal),
    /// Operator symbol appearing as an operand.
    OpTag(String),
    /// Datatype literal naming a primitive kind (`integer`, `string`, ...).
    Datatype(String),
    /// Operator tag applied to zero or more children.
    SExpr { op: String, children: Vec<Expr> },
}

// Factory Methods

impl Expr {
    /// Create a nil literal.
    #[inline]
    pub fn nil() -> Self {
        Expr::Literal(Literal::Nil)
    }

    /// Create an integer literal.
    #[inline]
    pub fn int(n: i64) -> Self {
        Expr::Literal(Literal::Int(n))
    }

    /// Create a float literal.
    #[inline]
    pub fn float(f: f64) -> Self {
        Expr::Literal(Literal::Float(f))
    }

    /// Create a boolean literal.
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Expr::Literal(Literal::Bool(b))
    }

    /// Create a string literal.
    #[inline]
    pub fn str(s: impl Into<String>) -> Self {
        Expr::Literal(Literal::Str(s.into()))
    }

    /// Create a compiled-regex literal.
    #[inline]
    pub fn regex(re: Regex) -> Self {
        Expr::Literal(Literal::Regex(re))
    }

    /// Create an embedded argument list.
    #[inline]
    pub fn args(exprs: Vec<Expr>) -> Self {
        Expr::Literal(Literal::Args(exprs))
    }

    /// Create an embedded parameter-name list.
    #[inline]
    pub fn params<S: Into<String>>(names: Vec<S>) -> Self {
        Expr::Literal(Literal::Params(names.into_iter().map(Into::into).collect()))
    }

    /// Create an operator-tag operand.
    #[inline]
    pub fn op(tag: impl Into<String>) -> Self {
        Expr::OpTag(tag.into())
    }

    /// Create a datatype literal.
    #[inline]
    pub fn datatype(name: impl Into<String>) -> Self {
        Expr::Datatype(name.into())
    }

    /// Create an s-expression node.
    #[inline]
    pub fn sexpr(op: impl Into<String>, children: Vec<Expr>) -> Self {
        Expr::SExpr {
            op: op.into(),
            children,
        }
    }

    /// Variable lookup: `$name`.
    pub fn var(name: impl Into<String>) -> Self {
        Expr::sexpr("$", vec![Expr::str(name)])
    }

    /// Property lookup: `name` resolved against the property layer.
    pub fn prop(name: impl Into<String>) -> Self {
        Expr::sexpr("p", vec![Expr::str(name)])
    }

    /// List construction: `[a, b, c]`.
    pub fn list(elements: Vec<Expr>) -> Self {
        Expr::sexpr("[]", elements)
    }

    /// Indexing: `receiver[index]`.
    pub fn index(receiver: Expr, index: Expr) -> Self {
        Expr::sexpr("@", vec![receiver, index])
    }

    /// Method call: `receiver.name` with optional extras (args, params, body).
    pub fn method(receiver: Expr, name: impl Into<String>, extras: Vec<Expr>) -> Self {
        let mut children = vec![receiver, Expr::str(name)];
        children.extend(extras);
        Expr::sexpr(".", children)
    }

    /// True when this node is the literal nil.
    ///
    /// Call assembly uses this to normalize a literal-nil body to "absent"
    /// so body-presence validation stays correct.
    #[inline]
    pub fn is_nil_literal(&self) -> bool {
        matches!(self, Expr::Literal(Literal::Nil))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => match lit {
                Literal::Nil => write!(f, "nil"),
                Literal::Bool(b) => write!(f, "{b}"),
                Literal::Int(n) => write!(f, "{n}"),
                Literal::Float(x) => write!(f, "{x}"),
                Literal::Str(s) => write!(f, "{s:?}"),
                Literal::Regex(re) => write!(f, "/{}/", re.as_str()),
                Literal::Args(exprs) => {
                    write!(f, "(")?;
                    for (i, e) in exprs.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{e}")?;
                    }
                    write!(f, ")")
                }
                Literal::Params(names) => write!(f, "|{}|", names.join(", ")),
            },
            Expr::OpTag(tag) => write!(f, "{tag}"),
            Expr::Datatype(name) => write!(f, "{name}"),
            Expr::SExpr { op, children } => {
                write!(f, "({op}")?;
                for child in children {
                    write!(f, " {child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
