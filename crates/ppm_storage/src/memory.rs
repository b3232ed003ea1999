//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::StorageResult;
use parking_lot::RwLock;
use std::sync::Arc;

/// An in-memory storage backend.
///
/// Clones share the same underlying cell, so a test can hand one clone to
/// a store and keep another to inspect exactly what the store wrote.
///
/// # Example
///
/// ```rust
/// use ppm_storage::{StorageBackend, InMemoryBackend};
///
/// let observer = InMemoryBackend::new();
/// let mut backend = observer.clone();
/// backend.write_all(b"test data").unwrap();
/// assert_eq!(observer.data(), Some(b"test data".to_vec()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    data: Arc<RwLock<Option<Vec<u8>>>>,
}

impl InMemoryBackend {
    /// Creates a new backend with nothing stored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with pre-existing data.
    ///
    /// Useful for testing load and corruption scenarios.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self {
            data: Arc::new(RwLock::new(Some(data))),
        }
    }

    /// Returns a copy of the stored bytes, if any.
    #[must_use]
    pub fn data(&self) -> Option<Vec<u8>> {
        self.data.read().clone()
    }

    /// Forgets the stored object.
    pub fn clear(&mut self) {
        *self.data.write() = None;
    }
}

impl StorageBackend for InMemoryBackend {
    fn read_all(&self) -> StorageResult<Option<Vec<u8>>> {
        Ok(self.data.read().clone())
    }

    fn write_all(&mut self, data: &[u8]) -> StorageResult<()> {
        *self.data.write() = Some(data.to_vec());
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        Ok(self.data.read().as_ref().map_or(0, |d| d.len() as u64))
    }

    fn sync(&mut self) -> StorageResult<()> {
        // Nothing to make durable
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = InMemoryBackend::new();
        assert_eq!(backend.size().unwrap(), 0);
        assert!(backend.read_all().unwrap().is_none());
    }

    #[test]
    fn memory_write_then_read() {
        let mut backend = InMemoryBackend::new();
        backend.write_all(b"hello").unwrap();
        assert_eq!(backend.read_all().unwrap().unwrap(), b"hello");
        assert_eq!(backend.size().unwrap(), 5);
    }

    #[test]
    fn memory_write_replaces() {
        let mut backend = InMemoryBackend::new();
        backend.write_all(b"hello world").unwrap();
        backend.write_all(b"bye").unwrap();
        assert_eq!(backend.read_all().unwrap().unwrap(), b"bye");
    }

    #[test]
    fn memory_clones_share_data() {
        let observer = InMemoryBackend::new();
        let mut writer = observer.clone();
        writer.write_all(b"shared").unwrap();
        assert_eq!(observer.data().unwrap(), b"shared");
    }

    #[test]
    fn memory_with_data() {
        let backend = InMemoryBackend::with_data(b"preloaded".to_vec());
        assert_eq!(backend.size().unwrap(), 9);
        assert_eq!(backend.read_all().unwrap().unwrap(), b"preloaded");
    }

    #[test]
    fn memory_clear() {
        let mut backend = InMemoryBackend::with_data(b"some data".to_vec());
        backend.clear();
        assert!(backend.read_all().unwrap().is_none());
    }

    #[test]
    fn memory_sync_succeeds() {
        let mut backend = InMemoryBackend::new();
        assert!(backend.sync().is_ok());
    }
}
