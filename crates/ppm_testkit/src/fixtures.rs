//! Test fixtures and store helpers.
//!
//! Provides convenience functions for setting up test stores
//! and common test scenarios.

use ppm_core::{Config, Store};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Passphrase used by fixtures unless a test picks its own.
pub const TEST_PASSPHRASE: &str = "secret";

/// A file-backed test store with automatic cleanup.
pub struct TempStore {
    /// The store instance.
    pub store: Store,
    path: PathBuf,
    passphrase: String,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl TempStore {
    /// Creates an empty store in a fresh temporary directory.
    pub fn new() -> Self {
        Self::with_passphrase(TEST_PASSPHRASE)
    }

    /// Creates an empty store opened with `passphrase`.
    pub fn with_passphrase(passphrase: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("passwords.ppm");
        let store = Store::open(Some(path.as_path()), passphrase).expect("Failed to open store");

        Self {
            store,
            path,
            passphrase: passphrase.to_string(),
            _temp_dir: temp_dir,
        }
    }

    /// Path of the password file (may not exist until the first save).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Closes the store and opens the same file again.
    ///
    /// Unsaved changes are lost, exactly as for a real process restart.
    pub fn reopen(&mut self) {
        let passphrase = self.passphrase.clone();
        self.reopen_with(&passphrase);
    }

    /// Closes the store and opens the same file with another passphrase.
    pub fn reopen_with(&mut self, passphrase: &str) {
        let config = Config::new().path(&self.path);
        let store = Store::open_with_config(config, passphrase).expect("Failed to reopen store");
        std::mem::replace(&mut self.store, store).close();
        self.passphrase = passphrase.to_string();
    }

    /// Raw bytes of the password file, if it has been written.
    pub fn file_bytes(&self) -> Option<Vec<u8>> {
        std::fs::read(&self.path).ok()
    }
}

impl Default for TempStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TempStore {
    type Target = Store;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

impl std::ops::DerefMut for TempStore {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.store
    }
}

/// Runs a test with a temporary in-memory store.
///
/// # Example
///
/// ```rust,ignore
/// use ppm_testkit::with_temp_store;
///
/// #[test]
/// fn my_test() {
///     with_temp_store(|store| {
///         store.add("github", "pw1").unwrap();
///         assert_eq!(store.get("github"), Some("pw1"));
///     });
/// }
/// ```
pub fn with_temp_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut Store) -> R,
{
    let mut store = Store::open_in_memory(TEST_PASSPHRASE).expect("Failed to open store");
    f(&mut store)
}

/// Runs a test with a temporary file-backed store.
pub fn with_temp_file_store<F, R>(f: F) -> R
where
    F: FnOnce(&mut TempStore) -> R,
{
    let mut store = TempStore::new();
    f(&mut store)
}

/// Sample entries for tests.
pub fn sample_entries() -> Vec<(&'static str, &'static str)> {
    vec![
        ("github", "pw1"),
        ("mail", "correct horse battery staple"),
        ("bank", "0000"),
        ("wifi", "p@ss w0rd!"),
    ]
}
