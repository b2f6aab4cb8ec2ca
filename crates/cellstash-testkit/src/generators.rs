//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cellstash_core::{Scope, Value};

/// Generate a non-empty key.
pub fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_.]{0,23}"
}

/// Generate a scope tag drawn from the fixture sheets, including global.
pub fn scope_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("Sheet1".to_string()),
        Just("Sheet2".to_string()),
    ]
}

/// Generate a scope from [`scope_tag`].
pub fn scope() -> impl Strategy<Value = Scope> {
    scope_tag().prop_map(Scope::new)
}

/// Generate a value of any supported kind.
pub fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::Int),
        any::<bool>().prop_map(Value::Bool),
        "\\PC{0,32}".prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(Value::Blob),
    ]
}

/// Generate a small batch of distinct-key entries for one store.
pub fn entries(max: usize) -> impl Strategy<Value = Vec<(String, Value)>> {
    prop::collection::btree_map(key(), value(), 0..=max)
        .prop_map(|m| m.into_iter().collect())
}
