//! Growable, always-terminated byte buffer.

/// Number of bytes added to the capacity each time the buffer fills up.
pub const GROW_STEP: usize = 32;

/// A growable byte sequence that is NUL-terminated after every mutation.
///
/// The buffer tracks its own logical capacity and grows it by a fixed
/// [`GROW_STEP`] rather than by a multiplier. One byte of the capacity is
/// always reserved for the terminator, so `capacity() > len()` holds at
/// all times and [`as_bytes_with_nul`](Self::as_bytes_with_nul) can be
/// handed to anything expecting a C-style string.
///
/// # Example
///
/// ```
/// use ppm_codec::ByteBuffer;
///
/// let mut buf = ByteBuffer::new();
/// buf.push_str("github");
/// buf.push(b'\t');
/// assert_eq!(buf.as_bytes(), b"github\t");
/// assert_eq!(buf.as_bytes_with_nul(), b"github\t\0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    /// Content followed by exactly one terminator byte.
    data: Vec<u8>,
    capacity: usize,
}

impl ByteBuffer {
    /// Creates an empty buffer with [`GROW_STEP`] bytes of capacity.
    #[must_use]
    pub fn new() -> Self {
        let mut data = Vec::with_capacity(GROW_STEP);
        data.push(0);
        Self {
            data,
            capacity: GROW_STEP,
        }
    }

    /// Creates a buffer holding a copy of `seed`, with a full
    /// [`GROW_STEP`] of spare room after the terminator.
    #[must_use]
    pub fn with_seed(seed: &[u8]) -> Self {
        let capacity = seed.len() + 1 + GROW_STEP;
        let mut data = Vec::with_capacity(capacity);
        data.extend_from_slice(seed);
        data.push(0);
        Self { data, capacity }
    }

    /// Appends one byte.
    pub fn push(&mut self, byte: u8) {
        if self.len() + 1 == self.capacity {
            self.grow_to_fit(1);
        }
        let end = self.len();
        self.data[end] = byte;
        self.data.push(0);
    }

    /// Appends every byte of `bytes`.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        if self.len() + bytes.len() >= self.capacity {
            self.grow_to_fit(bytes.len());
        }
        self.data.pop();
        self.data.extend_from_slice(bytes);
        self.data.push(0);
    }

    /// Appends the UTF-8 bytes of `s`.
    pub fn push_str(&mut self, s: &str) {
        self.extend_from_slice(s.as_bytes());
    }

    /// Discards the content and reinitializes the buffer, optionally with
    /// a new seed.
    pub fn reset(&mut self, seed: Option<&[u8]>) {
        *self = match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        };
    }

    /// Number of content bytes, not counting the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len() - 1
    }

    /// Returns `true` if the buffer holds no content bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Logical capacity, including the byte reserved for the terminator.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Content bytes without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len()]
    }

    /// Content bytes followed by the NUL terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.data
    }

    /// Content decoded as UTF-8, replacing invalid sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(self.as_bytes()).into_owned()
    }

    /// Consumes the buffer and returns the content bytes.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.data.pop();
        self.data
    }

    fn grow_to_fit(&mut self, additional: usize) {
        let needed = self.len() + additional + 1;
        while self.capacity < needed {
            self.capacity += GROW_STEP;
        }
        self.data.reserve_exact(self.capacity - self.data.len());
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ByteBuffer {
    fn from(seed: &str) -> Self {
        Self::with_seed(seed.as_bytes())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
