//! Storage backend trait definition.

use crate::error::StorageResult;

/// A whole-object storage backend for ppm.
///
/// Backends are **opaque byte stores**. The password file is always read
/// in full and rewritten in full, so the interface has no offsets and no
/// partial writes. Backends do not interpret the bytes they hold; the
/// ciphertext format belongs to `ppm_core`.
///
/// # Invariants
///
/// - `read_all` returns exactly the bytes of the last successful `write_all`
/// - `read_all` returns `None` until something has been written
/// - `write_all` replaces the previous content; it is **not** atomic, a
///   crash in the middle of it may leave a truncated object behind
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait StorageBackend: Send + Sync {
    /// Reads the complete stored object.
    ///
    /// Returns `Ok(None)` if nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the object exists but cannot be read.
    fn read_all(&self) -> StorageResult<Option<Vec<u8>>>;

    /// Replaces the stored object with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the object cannot be created or written.
    fn write_all(&mut self, data: &[u8]) -> StorageResult<()>;

    /// Returns the current size of the stored object in bytes.
    ///
    /// A missing object has size 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be determined.
    fn size(&self) -> StorageResult<u64>;

    /// Syncs written data and metadata to durable storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync operation fails.
    fn sync(&mut self) -> StorageResult<()>;
}
