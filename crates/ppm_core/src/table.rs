//! Chained hash table holding the password entries.
//!
//! Each bucket owns a chain of entries in insertion order. The table grows
//! by doubling its bucket count as soon as it holds as many entries as it
//! has buckets, rehashing every entry into the new bucket array.

use std::fmt;
use std::slice;

/// Bucket count used when no explicit size is requested.
pub const DEFAULT_BUCKETS: usize = 32;

/// Multiplicative rolling hash over the key bytes (`h = h * 33 + byte`).
#[must_use]
pub fn hash(key: &[u8]) -> u32 {
    key.iter()
        .fold(0u32, |h, &b| h.wrapping_mul(33).wrapping_add(u32::from(b)))
}

/// A single key/value pair stored in a bucket chain.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// The entry's key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The entry's value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

/// Chained hash table mapping unique string keys to string values.
#[derive(Clone)]
pub struct Table {
    buckets: Vec<Vec<Entry>>,
    count: usize,
}

impl Table {
    /// Creates an empty table with `initial_size` buckets (at least one).
    #[must_use]
    pub fn new(initial_size: usize) -> Self {
        Self {
            buckets: empty_buckets(initial_size.max(1)),
            count: 0,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the table holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Current number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Inserts or replaces the value for `key`.
    ///
    /// Returns the previous value if the key was already present. A new key
    /// is appended to the end of its bucket chain; if the table is full the
    /// bucket array doubles first.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();

        if let Some(slot) = self.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }

        if self.count == self.buckets.len() {
            self.resize(self.buckets.len() * 2);
        }
        let index = self.bucket_index(&key);
        self.buckets[index].push(Entry { key, value });
        self.count += 1;
        None
    }

    /// Looks up the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|e| e.key == key)
            .map(Entry::value)
    }

    /// Mutable access to the value stored for `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut String> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|e| e.key == key)
            .map(|e| &mut e.value)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Detaches the entry for `key` from its chain and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|e| e.key == key)?;
        let entry = chain.remove(position);
        self.count -= 1;
        Some(entry.value)
    }

    /// Removes every entry, keeping the current bucket count.
    pub fn clear(&mut self) {
        for chain in &mut self.buckets {
            chain.clear();
        }
        self.count = 0;
    }

    /// Iterates over `(key, value)` pairs, bucket by bucket.
    ///
    /// Order across buckets is unspecified; within a bucket it is insertion
    /// order. Each call starts a fresh traversal.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: <&[Entry]>::default().iter(),
        }
    }

    pub(crate) fn bucket_index(&self, key: &str) -> usize {
        hash(key.as_bytes()) as usize % self.buckets.len()
    }

    fn resize(&mut self, new_size: usize) {
        let old = std::mem::replace(&mut self.buckets, empty_buckets(new_size));
        for entry in old.into_iter().flatten() {
            let index = self.bucket_index(&entry.key);
            self.buckets[index].push(entry);
        }
    }
}

fn empty_buckets(size: usize) -> Vec<Vec<Entry>> {
    std::iter::repeat_with(Vec::new).take(size).collect()
}

impl Default for Table {
    fn default() -> Self {
        Self::new(DEFAULT_BUCKETS)
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("buckets", &self.buckets.len())
            .field("count", &self.count)
            .finish()
    }
}

/// Lazy iterator over a [`Table`]'s entries.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    buckets: slice::Iter<'a, Vec<Entry>>,
    chain: slice::Iter<'a, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                return Some((entry.key(), entry.value()));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Table {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Table {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::default();
        table.extend(iter);
        table
    }
}
