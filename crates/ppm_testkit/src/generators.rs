//! Property-based test generators using proptest.
//!
//! Keys and values never contain TAB, NEWLINE or NUL, the bytes the
//! text format cannot carry.

use proptest::prelude::*;
use std::collections::BTreeMap;

/// Strategy for generating application names.
pub fn app_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9._@-]{1,32}").expect("Invalid regex")
}

/// Strategy for generating passwords, including spaces and non-ASCII text.
pub fn password_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[^\t\n\r\x00]{1,48}").expect("Invalid regex")
}

/// Strategy for generating a set of unique entries.
pub fn entries_strategy(max: usize) -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(app_name_strategy(), password_strategy(), 0..=max)
}

/// A store operation for model-based tests.
#[derive(Debug, Clone)]
pub enum StoreOp {
    /// `add(app, password)`.
    Add(String, String),
    /// `update(app, password)`.
    Update(String, String),
    /// `remove(app)`.
    Remove(String),
    /// `save()`.
    Save,
    /// Close and reopen from the backend.
    Reopen,
}

/// Strategy for generating operation sequences over a small key space,
/// so adds, updates and removes frequently hit the same keys.
pub fn store_ops_strategy(len: usize) -> impl Strategy<Value = Vec<StoreOp>> {
    let key = prop::sample::select(vec!["github", "mail", "bank", "wifi", "ab", "ba"])
        .prop_map(str::to_string);
    let op = prop_oneof![
        4 => (key.clone(), password_strategy()).prop_map(|(k, v)| StoreOp::Add(k, v)),
        2 => (key.clone(), password_strategy()).prop_map(|(k, v)| StoreOp::Update(k, v)),
        2 => key.prop_map(StoreOp::Remove),
        1 => Just(StoreOp::Save),
        1 => Just(StoreOp::Reopen),
    ];
    prop::collection::vec(op, 0..len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::strategy::ValueTree;
    use proptest::test_runner::TestRunner;

    #[test]
    fn generated_entries_are_encodable() {
        let mut runner = TestRunner::default();
        for _ in 0..50 {
            let entries = entries_strategy(16)
                .new_tree(&mut runner)
                .unwrap()
                .current();
            for (key, value) in &entries {
                assert!(!key.is_empty());
                assert!(!value.is_empty());
                for text in [key, value] {
                    assert!(!text.contains(|c: char| matches!(c, '\t' | '\n' | '\0')));
                }
            }
        }
    }
}
