//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A file-based storage backend.
///
/// The backend holds only a path; every read opens the file and reads it
/// to the end, every write truncates it and writes the new content.
///
/// # Durability
///
/// - `write_all()` flushes the file before returning
/// - `sync()` calls `File::sync_all()` to ensure data is on disk
///
/// # Example
///
/// ```no_run
/// use ppm_storage::{StorageBackend, FileBackend};
/// use std::path::Path;
///
/// let mut backend = FileBackend::new(Path::new("passwords.ppm"));
/// backend.write_all(b"ciphertext").unwrap();
/// backend.sync().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
    create_dirs: bool,
}

impl FileBackend {
    /// Creates a backend for the file at `path`.
    ///
    /// Nothing is touched on disk until the first read or write.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            create_dirs: false,
        }
    }

    /// Creates a backend that creates missing parent directories on write.
    #[must_use]
    pub fn with_create_dirs(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            create_dirs: true,
        }
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn check_not_dir(&self) -> StorageResult<()> {
        if self.path.is_dir() {
            return Err(StorageError::NotAFile(self.path.clone()));
        }
        Ok(())
    }
}

impl StorageBackend for FileBackend {
    fn read_all(&self) -> StorageResult<Option<Vec<u8>>> {
        self.check_not_dir()?;
        match fs::read(&self.path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&mut self, data: &[u8]) -> StorageResult<()> {
        self.check_not_dir()?;
        if self.create_dirs {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data)?;
        file.flush()?;
        Ok(())
    }

    fn size(&self) -> StorageResult<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn sync(&mut self) -> StorageResult<()> {
        if !self.path.exists() {
            return Ok(());
        }
        let file = File::open(&self.path)?;
        file.sync_all()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_missing_reads_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.ppm");

        let backend = FileBackend::new(&path);
        assert!(backend.read_all().unwrap().is_none());
        assert_eq!(backend.size().unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn file_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.ppm");

        let mut backend = FileBackend::new(&path);
        backend.write_all(b"hello world").unwrap();

        assert_eq!(backend.size().unwrap(), 11);
        assert_eq!(backend.read_all().unwrap().unwrap(), b"hello world");
    }

    #[test]
    fn file_write_replaces_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.ppm");

        let mut backend = FileBackend::new(&path);
        backend.write_all(b"a much longer first version").unwrap();
        backend.write_all(b"short").unwrap();

        assert_eq!(backend.read_all().unwrap().unwrap(), b"short");
    }

    #[test]
    fn file_persistence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.ppm");

        {
            let mut backend = FileBackend::new(&path);
            backend.write_all(b"persistent data").unwrap();
            backend.sync().unwrap();
        }

        {
            let backend = FileBackend::new(&path);
            assert_eq!(backend.read_all().unwrap().unwrap(), b"persistent data");
        }
    }

    #[test]
    fn file_empty_existing_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.ppm");
        File::create(&path).unwrap();

        let backend = FileBackend::new(&path);
        assert_eq!(backend.read_all().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn file_missing_parent_fails_without_create_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("test.ppm");

        let mut backend = FileBackend::new(&path);
        let result = backend.write_all(b"data");
        assert!(matches!(result, Err(StorageError::Io(_))));
    }

    #[test]
    fn file_create_with_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("test.ppm");

        let mut backend = FileBackend::with_create_dirs(&path);
        backend.write_all(b"data").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn file_directory_is_rejected() {
        let dir = tempdir().unwrap();

        let backend = FileBackend::new(dir.path());
        assert!(matches!(
            backend.read_all(),
            Err(StorageError::NotAFile(_))
        ));
    }

    #[test]
    fn file_sync_without_file_succeeds() {
        let dir = tempdir().unwrap();
        let mut backend = FileBackend::new(&dir.path().join("never-written"));
        assert!(backend.sync().is_ok());
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.ppm");

        let backend = FileBackend::new(&path);
        assert_eq!(backend.path(), path);
    }
}
