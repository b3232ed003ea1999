//! # ppm Core
//!
//! Encrypted key-value store engine for ppm.
//!
//! This crate provides:
//! - [`Table`], a chained hash table of app name to password
//! - [`crypto::Cipher`], AES-256-CBC keyed from a passphrase
//! - [`Store`], which loads, mutates and saves the encrypted password file
//! - [`Config`] for path resolution and table sizing
//!
//! ## File Format
//!
//! The password file is the ciphertext of `key TAB value NEWLINE` lines
//! followed by one NUL byte. There is no header, version tag or MAC.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod crypto;
mod error;
mod store;
mod table;

pub use config::{Config, DEFAULT_FILE_NAME};
pub use error::{CoreError, CoreResult};
pub use store::Store;
pub use table::{hash, Entry, Iter, Table, DEFAULT_BUCKETS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
