//! # ppm Storage
//!
//! Storage backend trait and implementations for ppm.
//!
//! This crate provides the lowest-level storage abstraction for ppm.
//! Storage backends are **opaque byte stores** holding one object (the
//! encrypted password file) that is always read and written whole.
//!
//! ## Design Principles
//!
//! - Backends are simple byte stores (read everything, overwrite everything)
//! - No knowledge of the cipher or the entry format
//! - Overwrites are not atomic; there is no write-ahead or rename step
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use ppm_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! assert!(backend.read_all().unwrap().is_none());
//! backend.write_all(b"hello world").unwrap();
//! assert_eq!(backend.read_all().unwrap().unwrap(), b"hello world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
