//! Entry decoder.

use crate::buffer::ByteBuffer;
use crate::{ENTRY_TERMINATOR, FIELD_SEPARATOR};

/// Decode entries from their text form.
///
/// The returned decoder is a lazy iterator; collect it or feed it to
/// anything implementing [`Extend`].
///
/// # Example
///
/// ```
/// use ppm_codec::decode_entries;
///
/// let entries: Vec<_> = decode_entries(b"github\tpw1\nmail\tpw2").collect();
/// assert_eq!(entries[0], ("github".to_string(), "pw1".to_string()));
/// assert_eq!(entries[1], ("mail".to_string(), "pw2".to_string()));
/// ```
pub fn decode_entries(bytes: &[u8]) -> TextDecoder<'_> {
    TextDecoder::new(bytes)
}

/// Byte-by-byte decoder yielding `(key, value)` pairs.
///
/// Decoding rules:
/// - bytes before a TAB accumulate into the key, bytes after it into the
///   value; every TAB acts as the switch and is dropped
/// - NEWLINE ends the entry
/// - a NUL byte ends the input, so a decrypted buffer that still carries
///   its terminator decodes cleanly
/// - a final entry without NEWLINE is still produced
/// - lines with neither key nor value bytes are skipped
///
/// Invalid UTF-8 is replaced rather than rejected: the input may be the
/// output of decrypting with the wrong passphrase.
#[derive(Debug)]
pub struct TextDecoder<'a> {
    data: &'a [u8],
    pos: usize,
    key: ByteBuffer,
    value: ByteBuffer,
}

impl<'a> TextDecoder<'a> {
    /// Create a new decoder for the given bytes.
    pub fn new(data: &'a [u8]) -> Self {
        let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
        Self {
            data: &data[..end],
            pos: 0,
            key: ByteBuffer::new(),
            value: ByteBuffer::new(),
        }
    }

    /// Check if all bytes have been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> &[u8] {
        &self.data[self.pos..]
    }

    fn take_entry(&mut self) -> Option<(String, String)> {
        if self.key.is_empty() && self.value.is_empty() {
            return None;
        }
        let entry = (self.key.to_string_lossy(), self.value.to_string_lossy());
        self.key.reset(None);
        self.value.reset(None);
        Some(entry)
    }
}

impl Iterator for TextDecoder<'_> {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        let mut in_value = false;
        while let Some(&byte) = self.data.get(self.pos) {
            self.pos += 1;
            match byte {
                ENTRY_TERMINATOR => {
                    if let Some(entry) = self.take_entry() {
                        return Some(entry);
                    }
                    in_value = false;
                }
                FIELD_SEPARATOR => in_value = true,
                _ if in_value => self.value.push(byte),
                _ => self.key.push(byte),
            }
        }
        self.take_entry()
    }
}
