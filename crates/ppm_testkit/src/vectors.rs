//! Known-answer vectors for the password file format.
//!
//! Each vector fixes the passphrase, the plaintext handed to the cipher
//! (including the trailing NUL when the store wrote it) and the exact
//! file bytes. They pin key derivation, padding and the IV so that files
//! written by one build open in the next.

use serde::{Deserialize, Serialize};

/// A password file test vector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Passphrase the file is encrypted with.
    pub passphrase: String,
    /// Derived key (hex-encoded).
    pub key_hex: String,
    /// Derived IV (hex-encoded).
    pub iv_hex: String,
    /// Plaintext passed to the cipher (hex-encoded).
    pub plaintext_hex: String,
    /// Expected file contents (hex-encoded).
    pub ciphertext_hex: String,
}

/// Password file vectors.
pub fn file_vectors() -> Vec<FileVector> {
    vec![
        FileVector {
            id: "single_entry".into(),
            description: "One entry with terminator, fits in one block".into(),
            passphrase: "secret".into(),
            key_hex: "b844c659f27b63890c1918c93d7f1369b6b0f91325be0f4be80302e77aef622f".into(),
            iv_hex: "e77eb3220f670233902c1c8ae23c3b98".into(),
            plaintext_hex: hex_encode(b"github\tpw1\n\0"),
            ciphertext_hex: "8a2ef19e3c6dc2161c20b3506fe5f533".into(),
        },
        FileVector {
            id: "two_entries".into(),
            description: "Two entries spanning two blocks, value with spaces".into(),
            passphrase: "hunter2".into(),
            key_hex: "53e7665db7abd980a34c7e7ac04fe613cc2389ba9c6839b1cad85efefebbfc48".into(),
            iv_hex: "fc34eecb3483a2a648c2dfaf09306e21".into(),
            plaintext_hex: hex_encode(b"github\tpw1\nmail\tcorrect horse\n\0"),
            ciphertext_hex: "a7d17714a83c28fd896938450d72a7ce75871317cec2f42023d075eb453d96c4"
                .into(),
        },
        FileVector {
            id: "empty_passphrase".into(),
            description: "Empty passphrase, entry with empty value".into(),
            passphrase: String::new(),
            key_hex: "632f92b81c2753b0b265f1c1964c9234524376aa531417d27297e22f410a00e2".into(),
            iv_hex: "515fd3422d29117b44a5dc5773fa117b".into(),
            plaintext_hex: hex_encode(b"app\t\n\0"),
            ciphertext_hex: "b9a77bd86c3749a83282333ae8ed394f".into(),
        },
        FileVector {
            id: "full_block".into(),
            description: "Block-aligned plaintext gains a whole padding block".into(),
            passphrase: "secret".into(),
            key_hex: "b844c659f27b63890c1918c93d7f1369b6b0f91325be0f4be80302e77aef622f".into(),
            iv_hex: "e77eb3220f670233902c1c8ae23c3b98".into(),
            plaintext_hex: hex_encode(b"0123456789\tabcd\n"),
            ciphertext_hex: "c5886cf6e9244910c74e3d274aee3c6d31c8c80e061d5d1f4da6c5d2a86dae2b"
                .into(),
        },
    ]
}

/// Exports all vectors as JSON.
pub fn all_vectors_json() -> String {
    serde_json::to_string_pretty(&file_vectors()).unwrap_or_default()
}

/// Encodes bytes as lowercase hex.
pub fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Decodes a hex string.
///
/// # Panics
///
/// Panics on odd length or non-hex characters.
pub fn hex_decode(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "odd-length hex string");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppm_codec::decode_entries;
    use ppm_core::crypto::{Cipher, KeyDerivation};
    use ppm_core::{Config, Store};
    use ppm_storage::InMemoryBackend;

    #[test]
    fn key_derivation_vectors() {
        for vector in file_vectors() {
            let derived = KeyDerivation::default().derive(vector.passphrase.as_bytes());
            assert_eq!(hex_encode(derived.key()), vector.key_hex, "{}", vector.id);
            assert_eq!(hex_encode(derived.iv()), vector.iv_hex, "{}", vector.id);
        }
    }

    #[test]
    fn encrypt_vectors() {
        for vector in file_vectors() {
            let cipher = Cipher::new(&vector.passphrase).unwrap();
            let ciphertext = cipher.encrypt(&hex_decode(&vector.plaintext_hex)).unwrap();
            assert_eq!(hex_encode(&ciphertext), vector.ciphertext_hex, "{}", vector.id);
        }
    }

    #[test]
    fn decrypt_vectors() {
        for vector in file_vectors() {
            let cipher = Cipher::new(&vector.passphrase).unwrap();
            let plaintext = cipher.decrypt(&hex_decode(&vector.ciphertext_hex)).unwrap();
            assert_eq!(hex_encode(&plaintext), vector.plaintext_hex, "{}", vector.id);
        }
    }

    #[test]
    fn store_writes_vector_bytes() {
        let backend = InMemoryBackend::new();
        let mut store =
            Store::open_with_backend(Config::default(), Box::new(backend.clone()), "secret")
                .unwrap();
        store.add("github", "pw1").unwrap();
        store.save().unwrap();

        let expected = &file_vectors()[0];
        assert_eq!(hex_encode(&backend.data().unwrap()), expected.ciphertext_hex);
    }

    #[test]
    fn store_reads_vector_bytes() {
        let vector = &file_vectors()[1];
        let backend = InMemoryBackend::with_data(hex_decode(&vector.ciphertext_hex));
        let store =
            Store::open_with_backend(Config::default(), Box::new(backend), &vector.passphrase)
                .unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("github"), Some("pw1"));
        assert_eq!(store.get("mail"), Some("correct horse"));
    }

    #[test]
    fn empty_value_survives() {
        let vector = &file_vectors()[2];
        let cipher = Cipher::new(&vector.passphrase).unwrap();
        let plaintext = cipher.decrypt(&hex_decode(&vector.ciphertext_hex)).unwrap();
        let entries: Vec<_> = decode_entries(&plaintext).collect();
        assert_eq!(entries, vec![("app".to_string(), String::new())]);
    }

    #[test]
    fn all_vectors_json_roundtrip() {
        let json = all_vectors_json();
        let parsed: Vec<FileVector> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), file_vectors().len());
        assert!(json.contains("single_entry"));
    }
}
