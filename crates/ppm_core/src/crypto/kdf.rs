//! Passphrase to key/IV derivation.
//!
//! The classic salted, iterated "bytes to key" construction:
//!
//! ```text
//! D_1 = H^c(passphrase || salt)
//! D_i = H^c(D_{i-1} || passphrase || salt)
//! key || iv = D_1 || D_2 || ...   (truncated)
//! ```

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Fixed salt: the little-endian `u32` words 1234 and 5432.
pub const DEFAULT_SALT: [u8; 8] = [0xd2, 0x04, 0x00, 0x00, 0x38, 0x15, 0x00, 0x00];

/// Fixed digest iteration count.
pub const DEFAULT_ITERATIONS: u32 = 5;

/// Parameters for deriving a key and IV from a passphrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDerivation {
    /// Salt appended to the passphrase.
    pub salt: [u8; 8],
    /// Number of digest rounds per output block.
    pub iterations: u32,
    /// Number of key bytes to produce.
    pub key_len: usize,
    /// Number of IV bytes to produce.
    pub iv_len: usize,
}

impl Default for KeyDerivation {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT,
            iterations: DEFAULT_ITERATIONS,
            key_len: super::KEY_SIZE,
            iv_len: super::IV_SIZE,
        }
    }
}

/// Output of [`KeyDerivation::derive`], wiped on drop.
pub struct DerivedKey {
    bytes: Zeroizing<Vec<u8>>,
    key_len: usize,
}

impl DerivedKey {
    /// Key bytes.
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.bytes[..self.key_len]
    }

    /// IV bytes.
    #[must_use]
    pub fn iv(&self) -> &[u8] {
        &self.bytes[self.key_len..]
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl KeyDerivation {
    /// Derives key and IV bytes from `passphrase` using SHA-256.
    #[must_use]
    pub fn derive(&self, passphrase: &[u8]) -> DerivedKey {
        let total = self.key_len + self.iv_len;
        let mut bytes = Zeroizing::new(Vec::with_capacity(total));
        let mut previous: Option<Zeroizing<Vec<u8>>> = None;

        while bytes.len() < total {
            let mut hasher = Sha256::new();
            if let Some(prev) = &previous {
                hasher.update(prev.as_slice());
            }
            hasher.update(passphrase);
            hasher.update(self.salt);

            let mut block = Zeroizing::new(hasher.finalize().to_vec());
            for _ in 1..self.iterations {
                *block = Sha256::digest(block.as_slice()).to_vec();
            }

            let take = (total - bytes.len()).min(block.len());
            bytes.extend_from_slice(&block[..take]);
            previous = Some(block);
        }

        DerivedKey {
            bytes,
            key_len: self.key_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_is_deterministic() {
        let kdf = KeyDerivation::default();
        let a = kdf.derive(b"secret");
        let b = kdf.derive(b"secret");
        assert_eq!(a.key(), b.key());
        assert_eq!(a.iv(), b.iv());
    }

    #[test]
    fn derive_lengths() {
        let derived = KeyDerivation::default().derive(b"secret");
        assert_eq!(derived.key().len(), 32);
        assert_eq!(derived.iv().len(), 16);
    }

    #[test]
    fn different_passphrases_differ() {
        let kdf = KeyDerivation::default();
        assert_ne!(kdf.derive(b"secret").key(), kdf.derive(b"Secret").key());
    }

    #[test]
    fn salt_changes_output() {
        let salted = KeyDerivation::default();
        let other = KeyDerivation {
            salt: [0; 8],
            ..KeyDerivation::default()
        };
        assert_ne!(salted.derive(b"pw").key(), other.derive(b"pw").key());
    }

    #[test]
    fn first_block_is_iterated_digest() {
        let kdf = KeyDerivation::default();
        let mut input = b"pw".to_vec();
        input.extend_from_slice(&DEFAULT_SALT);

        let mut expected = Sha256::digest(&input).to_vec();
        for _ in 1..DEFAULT_ITERATIONS {
            expected = Sha256::digest(&expected).to_vec();
        }
        assert_eq!(kdf.derive(b"pw").key(), expected.as_slice());
    }

    #[test]
    fn iv_comes_from_second_block() {
        let kdf = KeyDerivation::default();
        let derived = kdf.derive(b"pw");

        let mut block = derived.key().to_vec();
        block.extend_from_slice(b"pw");
        block.extend_from_slice(&DEFAULT_SALT);
        let mut second = Sha256::digest(&block).to_vec();
        for _ in 1..DEFAULT_ITERATIONS {
            second = Sha256::digest(&second).to_vec();
        }
        assert_eq!(derived.iv(), &second[..16]);
    }

    #[test]
    fn debug_is_redacted() {
        let derived = KeyDerivation::default().derive(b"pw");
        assert!(format!("{derived:?}").contains("REDACTED"));
    }
}
