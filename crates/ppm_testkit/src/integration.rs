//! Cross-crate integration test helpers.
//!
//! Provides a harness that drives a [`Store`] and a plain `HashMap` model
//! side by side, checking after every step that they agree.

use crate::fixtures::TEST_PASSPHRASE;
use crate::generators::StoreOp;
use ppm_core::{Config, CoreError, Store};
use ppm_storage::InMemoryBackend;
use std::collections::HashMap;

/// A test harness for model-based testing.
pub struct StoreHarness {
    /// The store instance.
    pub store: Store,
    backend: InMemoryBackend,
    /// Entries expected in memory.
    model: HashMap<String, String>,
    /// Entries expected in the backend.
    saved: HashMap<String, String>,
}

impl StoreHarness {
    /// Creates a new harness over an empty in-memory backend.
    pub fn new() -> Self {
        let backend = InMemoryBackend::new();
        Self {
            store: open(&backend),
            backend,
            model: HashMap::new(),
            saved: HashMap::new(),
        }
    }

    /// Applies one operation to both the store and the model.
    ///
    /// # Panics
    ///
    /// Panics if the store's result or contents diverge from the model.
    pub fn apply(&mut self, op: &StoreOp) {
        match op {
            StoreOp::Add(key, value) => {
                let result = self.store.add(key, value);
                if self.model.contains_key(key) {
                    assert!(matches!(result, Err(CoreError::AlreadyExists { .. })));
                } else {
                    result.expect("add of a new key failed");
                    self.model.insert(key.clone(), value.clone());
                }
            }
            StoreOp::Update(key, value) => {
                let result = self.store.update(key, value);
                if let Some(slot) = self.model.get_mut(key) {
                    result.expect("update of an existing key failed");
                    slot.clone_from(value);
                } else {
                    assert!(matches!(result, Err(CoreError::NotFound { .. })));
                }
            }
            StoreOp::Remove(key) => {
                let result = self.store.remove(key);
                if self.model.remove(key).is_some() {
                    result.expect("remove of an existing key failed");
                } else {
                    assert!(matches!(result, Err(CoreError::NotFound { .. })));
                }
            }
            StoreOp::Save => {
                self.store.save().expect("save failed");
                if !self.model.is_empty() {
                    self.saved = self.model.clone();
                }
            }
            StoreOp::Reopen => {
                let store = open(&self.backend);
                std::mem::replace(&mut self.store, store).close();
                self.model = self.saved.clone();
            }
        }
        self.verify();
    }

    /// Checks that the store holds exactly the model's entries.
    ///
    /// # Panics
    ///
    /// Panics on the first mismatch.
    pub fn verify(&self) {
        assert_eq!(self.store.len(), self.model.len(), "entry count mismatch");
        for (key, value) in &self.model {
            assert_eq!(
                self.store.get(key),
                Some(value.as_str()),
                "value mismatch for {key:?}"
            );
        }
        let listed: HashMap<String, String> = self
            .store
            .list()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(listed, self.model, "list mismatch");
    }

    /// The bytes currently held by the backend.
    pub fn backend_bytes(&self) -> Option<Vec<u8>> {
        self.backend.data()
    }
}

impl Default for StoreHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn open(backend: &InMemoryBackend) -> Store {
    Store::open_with_backend(Config::default(), Box::new(backend.clone()), TEST_PASSPHRASE)
        .expect("Failed to open store")
}
