//! Transactional write batch.
//!
//! A `WriteBatch` buffers the writes of one invocation and makes them
//! visible to later reads in the same invocation. On success the batch is
//! handed to the store in one `apply_batch` call; on failure it is dropped
//! and nothing reaches the store.
//!
//! Entries replay in the order they were first written, so a store that
//! applies them one `put` at a time sees the handler's write order.

use std::collections::BTreeMap;

use crate::crypto::{hash_blake3, Hash};

/// Buffered writes of one invocation, in first-write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteBatch {
    entries: Vec<(String, Vec<u8>)>,
    /// Key to position in `entries`.
    index: BTreeMap<String, usize>,
    /// Total bytes written (keys + values).
    total_write_bytes: u64,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer a write. A later write to the same key replaces the value but
    /// keeps the key's original position.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        self.total_write_bytes = self
            .total_write_bytes
            .saturating_add((key.len() + value.len()) as u64);
        match self.index.get(&key) {
            Some(&pos) => {
                let prev_bytes = (key.len() + self.entries[pos].1.len()) as u64;
                self.total_write_bytes = self.total_write_bytes.saturating_sub(prev_bytes);
                self.entries[pos].1 = value;
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Look up a buffered value. `None` means the caller must read the store.
    pub fn get(&self, key: &str) -> Option<&[u8]> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Iterate over the buffered writes in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_write_bytes(&self) -> u64 {
        self.total_write_bytes
    }

    /// BLAKE3 digest of the write set.
    ///
    /// Each entry contributes `len(key) || key || len(value) || value` with
    /// u32 little-endian lengths, in key order. Two peers that produced the
    /// same writes produce the same digest, whatever order they wrote in.
    pub fn digest(&self) -> Hash {
        let mut buf = Vec::with_capacity(self.total_write_bytes as usize + self.entries.len() * 8);
        for (key, &pos) in &self.index {
            let value = &self.entries[pos].1;
            buf.extend_from_slice(&(key.len() as u32).to_le_bytes());
            buf.extend_from_slice(key.as_bytes());
            buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
            buf.extend_from_slice(value);
        }
        hash_blake3(&buf)
    }
}

impl IntoIterator for WriteBatch {
    type Item = (String, Vec<u8>);
    type IntoIter = std::vec::IntoIter<(String, Vec<u8>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_put_and_get() {
        let mut batch = WriteBatch::new();
        batch.put("Sku", b"WIDGET-1".to_vec());
        assert_eq!(batch.get("Sku"), Some(&b"WIDGET-1"[..]));
        assert_eq!(batch.get("missing"), None);
        assert!(batch.contains_key("Sku"));
    }

    #[test]
    fn test_batch_overwrite() {
        let mut batch = WriteBatch::new();
        batch.put("k", b"v1".to_vec());
        batch.put("k", b"v2".to_vec());
        assert_eq!(batch.get("k"), Some(&b"v2"[..]));
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn test_batch_iteration_order() {
        let mut batch = WriteBatch::new();
        batch.put("c", b"3".to_vec());
        batch.put("a", b"1".to_vec());
        batch.put("b", b"2".to_vec());
        let keys: Vec<&str> = batch.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);

        let owned: Vec<(String, Vec<u8>)> = batch.into_iter().collect();
        assert_eq!(owned[0], ("c".to_string(), b"3".to_vec()));
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut batch = WriteBatch::new();
        batch.put("TransactionId", b"id".to_vec());
        batch.put("Counter", b"1".to_vec());
        batch.put("Sku", b"W".to_vec());
        batch.put("Counter", b"2".to_vec());

        let owned: Vec<(String, Vec<u8>)> = batch.into_iter().collect();
        assert_eq!(
            owned,
            vec![
                ("TransactionId".to_string(), b"id".to_vec()),
                ("Counter".to_string(), b"2".to_vec()),
                ("Sku".to_string(), b"W".to_vec()),
            ]
        );
    }

    #[test]
    fn test_batch_total_write_bytes() {
        let mut batch = WriteBatch::new();
        // "key1" (4) + "value1" (6) = 10
        batch.put("key1", b"value1".to_vec());
        assert_eq!(batch.total_write_bytes(), 10);

        batch.put("key2", b"val2".to_vec());
        assert_eq!(batch.total_write_bytes(), 18);

        // Overwrite key1: subtract old (10), add new (5)
        batch.put("key1", b"v".to_vec());
        assert_eq!(batch.total_write_bytes(), 13);
    }

    #[test]
    fn test_digest_ignores_insertion_order() {
        let mut a = WriteBatch::new();
        a.put("x", b"1".to_vec());
        a.put("y", b"2".to_vec());

        let mut b = WriteBatch::new();
        b.put("y", b"2".to_vec());
        b.put("x", b"1".to_vec());

        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn test_digest_separates_key_and_value() {
        // Length prefixes keep "ab"="c" apart from "a"="bc".
        let mut a = WriteBatch::new();
        a.put("ab", b"c".to_vec());
        let mut b = WriteBatch::new();
        b.put("a", b"bc".to_vec());
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn test_empty_batch() {
        let batch = WriteBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert_eq!(batch.digest(), hash_blake3(b""));
    }
}
