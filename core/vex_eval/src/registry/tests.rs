use pretty_assertions::assert_eq;

use super::{global, BuiltinRegistry};

/// The frozen builtin surface.
const SURFACE: &[&str] = &[
    // Collection
    "Reduce", "Map", "Filter", "Count", "All", "Any", "AllOrNone", "Compact", "Unique", "Len",
    "Sum", "First", "Last", "Sort", "Reverse", "Flatten", "Contains",
    // Control flow
    "Then", "Lest", "With",
    // Numeric
    "Abs", "Floor", "Ceil", "Round", "Min", "Max", "Compare",
    // String
    "Upper", "Lower", "Trim", "TrimPrefix", "TrimSuffix", "Split", "Join", "StartsWith",
    "EndsWith", "Replace", "Substring",
    // Pattern
    "Match",
    // Utility
    "TypeOf", "IsNil", "Default", "Coalesce",
];

#[test]
fn standard_registry_covers_the_frozen_surface() {
    let registry = BuiltinRegistry::standard();
    for name in SURFACE {
        let def = registry.lookup(name);
        assert!(def.is_some(), "missing builtin {name}");
    }
    assert_eq!(registry.len(), SURFACE.len());
}

#[test]
fn lookup_is_case_insensitive_and_keeps_display_case() {
    let registry = global();
    let def = registry.lookup("allornone").unwrap();
    assert_eq!(def.name, "AllOrNone");
    assert!(registry.lookup("ALLORNONE").is_some());
    assert!(registry.lookup("AllOrNone").is_some());
}

#[test]
fn empty_registry_knows_nothing() {
    let registry = BuiltinRegistry::empty();
    assert!(registry.is_empty());
    assert!(registry.lookup("Map").is_none());
}

#[test]
fn coalesce_is_unlimited() {
    let registry = global();
    let def = registry.lookup("Coalesce").unwrap();
    assert_eq!(def.max_args, None);
}
