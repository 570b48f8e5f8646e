//! Immutable binding environments.
//!
//! A scope carries two layers: a shared, read-only property layer wrapped
//! around the caller's property source, and a variable layer that shadows
//! it. Extension never mutates; `with_var` hands back a fresh scope that
//! shares the property layer with its parent.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use vex_value::Value;

/// An immutable two-layer binding environment.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    /// Read-only property layer, shared across extensions.
    props: Arc<FxHashMap<String, Value>>,
    /// Variable layer; shadows the property layer.
    vars: Arc<FxHashMap<String, Value>>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Wrap a property source into a scope with no variables.
    pub fn from_props(props: FxHashMap<String, Value>) -> Self {
        Scope {
            props: Arc::new(props),
            vars: Arc::new(FxHashMap::default()),
        }
    }

    /// Exact-match lookup. Variables shadow properties.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.vars.get(name) {
            return Some(value.clone());
        }
        self.props.get(name).cloned()
    }

    /// Case-folding lookup.
    ///
    /// Exact matches win outright; on a miss, all case-insensitive matches
    /// are gathered and the lexicographically smallest original key decides,
    /// so case collisions resolve deterministically. Variables are consulted
    /// before properties at both stages.
    pub fn lookup_fold(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.lookup(name) {
            return Some(value);
        }
        if let Some(value) = fold_get(&self.vars, name) {
            return Some(value);
        }
        fold_get(&self.props, name)
    }

    /// Extend with a variable binding, shadowing any existing one.
    ///
    /// The parent scope is untouched; the property layer is shared.
    #[must_use]
    pub fn with_var(&self, name: impl Into<String>, value: Value) -> Scope {
        let mut vars = (*self.vars).clone();
        vars.insert(name.into(), value);
        Scope {
            props: Arc::clone(&self.props),
            vars: Arc::new(vars),
        }
    }

    /// Bind the conventional `self` name.
    #[must_use]
    pub fn with_self(&self, value: Value) -> Scope {
        self.with_var("self", value)
    }
}

/// Case-insensitive scan with deterministic tie-breaking.
///
/// Scopes are small, so rescanning all keys on a fold miss beats keeping a
/// secondary index.
pub(crate) fn fold_get(map: &FxHashMap<String, Value>, name: &str) -> Option<Value> {
    let folded = name.to_lowercase();
    let mut best: Option<&String> = None;
    for key in map.keys() {
        if key.to_lowercase() == folded {
            match best {
                Some(current) if current <= key => {}
                _ => best = Some(key),
            }
        }
    }
    best.and_then(|key| map.get(key).cloned())
}
