//! Benchmark utilities.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Generate `count` distinct application names.
pub fn app_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("app-{i:06}")).collect()
}

/// Generate `count` entries with passwords of `password_len` bytes.
pub fn generate_entries(count: usize, password_len: usize) -> Vec<(String, String)> {
    app_names(count)
        .into_iter()
        .enumerate()
        .map(|(i, app)| (app, password(i, password_len)))
        .collect()
}

/// Deterministic printable password of length `len`.
pub fn password(seed: usize, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*";
    (0..len)
        .map(|i| {
            let index = seed.wrapping_mul(31).wrapping_add(i * 7) % ALPHABET.len();
            char::from(ALPHABET[index])
        })
        .collect()
}
