//! # ppm Codec
//!
//! Plaintext encoding of password entries for ppm.
//!
//! The persisted plaintext is a flat sequence of entries, each written as:
//!
//! ```text
//! key TAB value NEWLINE
//! ```
//!
//! There is no header and no escaping. Keys or values containing TAB or
//! NEWLINE do not survive a round trip; callers that care must reject such
//! input before it reaches the encoder.
//!
//! ## Usage
//!
//! ```
//! use ppm_codec::{decode_entries, encode_entries};
//!
//! let text = encode_entries([("github", "pw1")]);
//! let entries: Vec<_> = decode_entries(text.as_bytes()).collect();
//! assert_eq!(entries, vec![("github".to_string(), "pw1".to_string())]);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod decoder;
mod encoder;

pub use buffer::{ByteBuffer, GROW_STEP};
pub use decoder::{decode_entries, TextDecoder};
pub use encoder::{encode_entries, TextEncoder};

/// Byte separating a key from its value.
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Byte ending an entry.
pub const ENTRY_TERMINATOR: u8 = b'\n';
