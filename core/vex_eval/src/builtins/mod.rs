//! Builtin implementations.
//!
//! Every builtin shares the uniform [`BuiltinFn`](crate::BuiltinFn)
//! signature and is registered once, by group, into the
//! [`BuiltinRegistry`](crate::BuiltinRegistry). Arity, parameter-count,
//! and body-presence validation happens at the single call gate in the
//! interpreter, never here.
//!
//! # Module Structure
//!
//! - [`helpers`]: receiver/argument extraction and lambda plumbing
//! - [`collections`]: sequence pipeline builtins (`Map`, `Filter`, ...)
//! - [`numeric`]: `Abs`, rounding, `Min`/`Max`, `Compare`
//! - [`strings`]: rune-aware string builtins
//! - [`control`]: nil-aware control flow (`Then`, `Lest`, `With`)
//! - [`utility`]: `TypeOf`, `IsNil`, `Default`, `Coalesce`
//! - [`pattern`]: regex capture via `Match`

mod collections;
mod control;
mod helpers;
mod numeric;
mod pattern;
mod strings;
mod utility;

use crate::registry::BuiltinRegistry;

/// Register the complete standard library.
pub(crate) fn register_all(registry: &mut BuiltinRegistry) {
    collections::register(registry);
    numeric::register(registry);
    strings::register(registry);
    control::register(registry);
    utility::register(registry);
    pattern::register(registry);
}
