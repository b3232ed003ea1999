//! Cryptographic operations for ppm.
//!
//! The password file is encrypted with AES-256 in CBC mode with PKCS#7
//! padding. Key and IV are derived from the passphrase with a fixed salt
//! and a small fixed iteration count, so the same passphrase always opens
//! the same file.
//!
//! ## Security Model
//!
//! - No random IV and no MAC: identical plaintexts give identical
//!   ciphertexts, and a wrong passphrase is not detected
//! - Key material is zeroized on drop and redacted from `Debug` output
//!
//! ## Usage
//!
//! ```
//! use ppm_core::crypto::Cipher;
//!
//! let cipher = Cipher::new("passphrase")?;
//! let ciphertext = cipher.encrypt(b"secret data")?;
//! let plaintext = cipher.decrypt(&ciphertext)?;
//! assert_eq!(plaintext, b"secret data");
//! # Ok::<(), ppm_core::CoreError>(())
//! ```

mod cipher;
mod kdf;

pub use cipher::Cipher;
pub use kdf::{DerivedKey, KeyDerivation, DEFAULT_ITERATIONS, DEFAULT_SALT};

/// Size of the AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;
/// Size of the CBC initialization vector in bytes.
pub const IV_SIZE: usize = 16;
/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;
