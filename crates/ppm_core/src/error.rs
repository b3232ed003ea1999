//! Error types for ppm core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in ppm core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Storage backend error.
    #[error("storage error: {0}")]
    Storage(#[from] ppm_storage::StorageError),

    /// No home directory could be found to place the default password file.
    #[error("failed to find home directory")]
    HomeNotFound,

    /// Key derivation did not produce a 256-bit key.
    #[error("key size is {} bits - should be 256 bits", .actual * 8)]
    KeySize {
        /// Expected size in bytes.
        expected: usize,
        /// Actual size in bytes.
        actual: usize,
    },

    /// Key derivation did not produce a 128-bit IV.
    #[error("IV size is {} bits - should be 128 bits", .actual * 8)]
    IvSize {
        /// Expected size in bytes.
        expected: usize,
        /// Actual size in bytes.
        actual: usize,
    },

    /// An entry with this key already exists.
    #[error("'{key}' already exists, use 'update' to change the password")]
    AlreadyExists {
        /// The conflicting key.
        key: String,
    },

    /// No entry with this key exists.
    #[error("'{key}' not found")]
    NotFound {
        /// The missing key.
        key: String,
    },
}

impl CoreError {
    /// Creates an invalid key size error.
    pub fn key_size(actual: usize, expected: usize) -> Self {
        Self::KeySize { expected, actual }
    }

    /// Creates an invalid IV size error.
    pub fn iv_size(actual: usize, expected: usize) -> Self {
        Self::IvSize { expected, actual }
    }

    /// Creates an already-exists error.
    pub fn already_exists(key: impl Into<String>) -> Self {
        Self::AlreadyExists { key: key.into() }
    }

    /// Creates a not-found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Returns `true` for errors after which the process must not continue.
    ///
    /// Storage errors are not fatal: the in-memory table is left untouched
    /// and the caller may retry or exit.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::HomeNotFound | Self::KeySize { .. } | Self::IvSize { .. }
        )
    }
}
