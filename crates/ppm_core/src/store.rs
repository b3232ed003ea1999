//! Store facade: load, mutate and save the encrypted password file.

use crate::config::Config;
use crate::crypto::Cipher;
use crate::error::{CoreError, CoreResult};
use crate::table::{Iter, Table};
use ppm_codec::{decode_entries, encode_entries};
use ppm_storage::{FileBackend, InMemoryBackend, StorageBackend};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zeroize::Zeroizing;

/// The password store.
///
/// A `Store` owns the entry [`Table`], the [`Cipher`] built from the
/// passphrase, and the backend holding the encrypted file. It is created
/// once per process and is not meant to be shared between threads.
///
/// Mutations only touch memory; nothing reaches the backend until
/// [`save`](Self::save) is called. Dropping or [closing](Self::close) a
/// store does not save it.
///
/// # Example
///
/// ```rust,no_run
/// use ppm_core::Store;
/// use std::path::Path;
///
/// let mut store = Store::open(Some(Path::new("passwords.ppm")), "secret")?;
/// store.add("github", "pw1")?;
/// assert_eq!(store.get("github"), Some("pw1"));
/// store.save()?;
/// store.close();
/// # Ok::<(), ppm_core::CoreError>(())
/// ```
pub struct Store {
    /// Resolved file path. None for stores over a caller-supplied backend.
    path: Option<PathBuf>,
    backend: Box<dyn StorageBackend>,
    cipher: Cipher,
    table: Table,
}

impl Store {
    /// Opens the store at `path`, or at `$HOME/.ppm` when `path` is `None`.
    ///
    /// A missing file is not an error: the store starts out empty.
    ///
    /// # Errors
    ///
    /// - [`CoreError::HomeNotFound`] if no path is given and there is no
    ///   home directory (fatal)
    /// - [`CoreError::KeySize`] if key derivation fails (fatal)
    /// - [`CoreError::Storage`] if the file exists but cannot be read
    pub fn open(path: Option<&Path>, passphrase: &str) -> CoreResult<Self> {
        let mut config = Config::default();
        if let Some(path) = path {
            config = config.path(path);
        }
        Self::open_with_config(config, passphrase)
    }

    /// Opens the store with custom configuration.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open).
    pub fn open_with_config(config: Config, passphrase: &str) -> CoreResult<Self> {
        let path = config.resolve_path()?;
        let backend = if config.create_dirs {
            FileBackend::with_create_dirs(&path)
        } else {
            FileBackend::new(&path)
        };
        debug!(path = %path.display(), "opening password file");

        let mut store = Self::open_with_backend(config, Box::new(backend), passphrase)?;
        store.path = Some(path);
        Ok(store)
    }

    /// Opens a store over a pre-configured backend.
    ///
    /// `config.path` is ignored; [`path`](Self::path) returns `None`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::KeySize`] if key derivation fails (fatal)
    /// - [`CoreError::Storage`] if the backend cannot be read
    pub fn open_with_backend(
        config: Config,
        backend: Box<dyn StorageBackend>,
        passphrase: &str,
    ) -> CoreResult<Self> {
        let cipher = Cipher::new(passphrase)?;
        let mut store = Self {
            path: None,
            backend,
            cipher,
            table: Table::new(config.initial_buckets),
        };
        store.load()?;
        Ok(store)
    }

    /// Opens an empty store that lives only in memory.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KeySize`] if key derivation fails.
    pub fn open_in_memory(passphrase: &str) -> CoreResult<Self> {
        Self::open_with_backend(
            Config::default(),
            Box::new(InMemoryBackend::new()),
            passphrase,
        )
    }

    fn load(&mut self) -> CoreResult<()> {
        let Some(ciphertext) = self.backend.read_all()? else {
            debug!("no password file yet, starting empty");
            return Ok(());
        };

        let plaintext = Zeroizing::new(self.cipher.decrypt(&ciphertext)?);
        self.table.extend(decode_entries(&plaintext));
        info!(
            bytes = ciphertext.len(),
            entries = self.table.len(),
            "loaded password file"
        );
        Ok(())
    }

    /// Adds a new entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::AlreadyExists`] if `key` is present; the stored
    /// value is left unchanged.
    pub fn add(&mut self, key: &str, value: &str) -> CoreResult<()> {
        if self.table.contains_key(key) {
            return Err(CoreError::already_exists(key));
        }
        self.table.insert(key, value);
        debug!(entries = self.table.len(), "entry added");
        Ok(())
    }

    /// Replaces the value of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if `key` is absent; nothing is added.
    pub fn update(&mut self, key: &str, value: &str) -> CoreResult<()> {
        let slot = self
            .table
            .get_mut(key)
            .ok_or_else(|| CoreError::not_found(key))?;
        value.clone_into(slot);
        debug!("entry updated");
        Ok(())
    }

    /// Removes an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if `key` is absent.
    pub fn remove(&mut self, key: &str) -> CoreResult<()> {
        self.table
            .remove(key)
            .ok_or_else(|| CoreError::not_found(key))?;
        debug!(entries = self.table.len(), "entry removed");
        Ok(())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key)
    }

    /// Returns `true` if an entry exists for `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.table.contains_key(key)
    }

    /// Iterates over all entries. Order is unspecified.
    pub fn list(&self) -> Iter<'_> {
        self.table.iter()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The resolved file path, if the store is file-backed.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Encrypts all entries and overwrites the backend.
    ///
    /// Saving an empty store does nothing, so removing the last entry and
    /// saving leaves the previous file in place.
    ///
    /// The overwrite is not atomic: a crash while writing can leave a
    /// truncated file.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Storage`] if the write fails. The in-memory
    /// entries are unaffected.
    pub fn save(&mut self) -> CoreResult<()> {
        if self.table.is_empty() {
            debug!("nothing to save");
            return Ok(());
        }

        let plaintext = encode_entries(self.table.iter());
        let ciphertext = self.cipher.encrypt(plaintext.as_bytes_with_nul())?;
        self.backend.write_all(&ciphertext)?;
        self.backend.sync()?;

        info!(
            bytes = ciphertext.len(),
            entries = self.table.len(),
            "saved password file"
        );
        Ok(())
    }

    /// Closes the store without saving.
    pub fn close(self) {
        info!(entries = self.table.len(), "store closed");
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("table", &self.table)
            .field("cipher", &self.cipher)
            .finish_non_exhaustive()
    }
}
