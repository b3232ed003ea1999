//! Entry encoder.

use crate::buffer::ByteBuffer;
use crate::{ENTRY_TERMINATOR, FIELD_SEPARATOR};

/// Encode a sequence of entries into their text form.
///
/// Each entry becomes `key TAB value NEWLINE`. Nothing is escaped: a key
/// or value that itself contains a TAB or NEWLINE will not decode back to
/// the same entry.
///
/// # Example
///
/// ```
/// use ppm_codec::encode_entries;
///
/// let text = encode_entries([("github", "pw1"), ("mail", "pw2")]);
/// assert_eq!(text.as_bytes(), b"github\tpw1\nmail\tpw2\n");
/// ```
pub fn encode_entries<'a, I>(entries: I) -> ByteBuffer
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut encoder = TextEncoder::new();
    for (key, value) in entries {
        encoder.encode_entry(key, value);
    }
    encoder.into_buffer()
}

/// Incremental encoder writing entries into a [`ByteBuffer`].
#[derive(Debug, Default)]
pub struct TextEncoder {
    buffer: ByteBuffer,
}

impl TextEncoder {
    /// Create a new encoder.
    pub fn new() -> Self {
        Self {
            buffer: ByteBuffer::new(),
        }
    }

    /// Append one entry.
    pub fn encode_entry(&mut self, key: &str, value: &str) {
        self.buffer.push_str(key);
        self.buffer.push(FIELD_SEPARATOR);
        self.buffer.push_str(value);
        self.buffer.push(ENTRY_TERMINATOR);
    }

    /// Get a reference to the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Consume this encoder and return the underlying buffer.
    pub fn into_buffer(self) -> ByteBuffer {
        self.buffer
    }
}
