//! Builtin registry.
//!
//! A single-writer, many-reader table from lowercase name to builtin
//! definition. Registration happens once, at initialization; lookups are
//! case-insensitive and the original-case display name is kept for
//! messages.

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;
use tracing::debug;

use vex_ir::Expr;
use vex_value::{EvalResult, Value};

use crate::builtins;
use crate::interpreter::Evaluator;
use crate::scope::Scope;

/// Uniform builtin implementation signature.
///
/// Arguments arrive as unevaluated subtrees so that short-circuiting
/// builtins (`Lest`, `Coalesce`) can defer them; eager builtins evaluate
/// through a shared helper. The body, when present, is the raw lambda
/// subtree evaluated per iteration in a child scope.
pub type BuiltinFn = fn(
    ev: &Evaluator,
    receiver: Value,
    args: &[Expr],
    params: &[String],
    body: Option<&Expr>,
    scope: &Scope,
) -> EvalResult;

/// A builtin's contract and implementation.
pub struct BuiltinDef {
    /// Original-case display name for messages.
    pub name: &'static str,
    /// Minimum positional argument count.
    pub min_args: usize,
    /// Maximum positional argument count; `None` means unlimited.
    pub max_args: Option<usize>,
    /// Maximum lambda parameter count; `0` means no lambda parameters.
    pub max_params: usize,
    /// Whether a lambda body must (`true`) or must not (`false`) be given.
    pub accept_body: bool,
    /// Implementation.
    pub func: BuiltinFn,
}

/// Case-insensitive name-to-definition table.
pub struct BuiltinRegistry {
    table: FxHashMap<String, BuiltinDef>,
}

impl BuiltinRegistry {
    /// Create an empty registry (for testing or custom configurations).
    pub fn empty() -> Self {
        BuiltinRegistry {
            table: FxHashMap::default(),
        }
    }

    /// Create a registry with the standard builtin library registered.
    pub fn standard() -> Self {
        let mut registry = BuiltinRegistry::empty();
        builtins::register_all(&mut registry);
        registry
    }

    /// Register a builtin. Later registrations of the same name replace
    /// earlier ones.
    pub fn register(&mut self, def: BuiltinDef) {
        debug!(name = def.name, "registering builtin");
        self.table.insert(def.name.to_lowercase(), def);
    }

    /// Case-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&BuiltinDef> {
        self.table.get(&name.to_lowercase())
    }

    /// Display names of all registered builtins.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.values().map(|def| def.name)
    }

    /// Number of registered builtins.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// The shared standard registry, built on first access.
pub fn global() -> Arc<BuiltinRegistry> {
    static GLOBAL: OnceLock<Arc<BuiltinRegistry>> = OnceLock::new();
    Arc::clone(GLOBAL.get_or_init(|| Arc::new(BuiltinRegistry::standard())))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
