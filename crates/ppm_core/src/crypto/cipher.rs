//! AES-256-CBC cipher keyed from a passphrase.

use super::kdf::KeyDerivation;
use super::{BLOCK_SIZE, IV_SIZE, KEY_SIZE};
use crate::error::{CoreError, CoreResult};
use aes::Aes256;
use cbc::cipher::block_padding::{NoPadding, Pkcs7};
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Key and IV, wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct KeyMaterial {
    key: [u8; KEY_SIZE],
    iv: [u8; IV_SIZE],
}

/// Passphrase-keyed block cipher for the password file.
///
/// Every call to [`encrypt`](Self::encrypt) or [`decrypt`](Self::decrypt)
/// primes a fresh CBC state from the stored key and IV, so chaining state
/// never carries over from one call to the next. The same plaintext
/// therefore always produces the same ciphertext.
///
/// There is no authentication tag: decrypting with the wrong passphrase
/// yields garbage instead of an error.
#[derive(Clone)]
pub struct Cipher {
    material: KeyMaterial,
}

impl Cipher {
    /// Derives the key and IV from `passphrase` with the default parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KeySize`] if derivation does not yield a 256-bit key.
    pub fn new(passphrase: &str) -> CoreResult<Self> {
        Self::with_derivation(passphrase.as_bytes(), &KeyDerivation::default())
    }

    /// Derives the key and IV from `passphrase` with explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::KeySize`] if `kdf` does not produce a 256-bit
    /// key, or [`CoreError::IvSize`] if it does not produce a 128-bit IV.
    pub fn with_derivation(passphrase: &[u8], kdf: &KeyDerivation) -> CoreResult<Self> {
        let derived = kdf.derive(passphrase);
        if derived.key().len() != KEY_SIZE {
            return Err(CoreError::key_size(derived.key().len(), KEY_SIZE));
        }
        if derived.iv().len() != IV_SIZE {
            return Err(CoreError::iv_size(derived.iv().len(), IV_SIZE));
        }

        let mut material = KeyMaterial {
            key: [0u8; KEY_SIZE],
            iv: [0u8; IV_SIZE],
        };
        material.key.copy_from_slice(derived.key());
        material.iv.copy_from_slice(derived.iv());
        Ok(Self { material })
    }

    /// Encrypts `plaintext`, padding it to a whole number of blocks.
    ///
    /// The output is always between 1 and [`BLOCK_SIZE`] bytes longer than
    /// the input.
    pub fn encrypt(&self, plaintext: &[u8]) -> CoreResult<Vec<u8>> {
        let encryptor = Aes256CbcEnc::new_from_slices(&self.material.key, &self.material.iv)
            .map_err(|_| CoreError::key_size(self.material.key.len(), KEY_SIZE))?;
        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    /// Decrypts `ciphertext` and strips the padding.
    ///
    /// This never rejects its input. When the padding does not verify
    /// (wrong passphrase, tampered file) the raw decrypted blocks are
    /// returned; trailing bytes that do not fill a block are ignored.
    pub fn decrypt(&self, ciphertext: &[u8]) -> CoreResult<Vec<u8>> {
        let whole = ciphertext.len() - ciphertext.len() % BLOCK_SIZE;
        if whole != ciphertext.len() {
            debug!(
                len = ciphertext.len(),
                "ciphertext is not block aligned, ignoring trailing bytes"
            );
        }
        let blocks = &ciphertext[..whole];

        let decryptor = self.decryptor()?;
        match decryptor.decrypt_padded_vec_mut::<Pkcs7>(blocks) {
            Ok(plaintext) => Ok(plaintext),
            Err(_) => {
                debug!("padding did not verify, returning unpadded blocks");
                Ok(self
                    .decryptor()?
                    .decrypt_padded_vec_mut::<NoPadding>(blocks)
                    .unwrap_or_default())
            }
        }
    }

    fn decryptor(&self) -> CoreResult<Aes256CbcDec> {
        Aes256CbcDec::new_from_slices(&self.material.key, &self.material.iv)
            .map_err(|_| CoreError::key_size(self.material.key.len(), KEY_SIZE))
    }
}

impl std::fmt::Debug for Cipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cipher")
            .field("material", &"[REDACTED]")
            .finish()
    }
}
