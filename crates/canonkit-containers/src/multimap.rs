//! Multimap keyed by canonical Json equality.

use crate::map::CanonicalJsonMap;
use canonkit_json::Json;

/// A map from canonical keys to ordered buckets of values, implemented as a
/// [`CanonicalJsonMap`] over `Vec<V>`. Bucket order is first-insertion order
/// of the keys; within a bucket, values keep append order.
#[derive(Default)]
pub struct CanonicalJsonMultiMap<V> {
    inner: CanonicalJsonMap<Vec<V>>,
}

impl<V> CanonicalJsonMultiMap<V> {
    /// Creates an empty multimap.
    pub fn new() -> Self {
        Self {
            inner: CanonicalJsonMap::new(),
        }
    }

    /// Number of distinct canonical keys.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no buckets exist.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Total number of values across all buckets.
    pub fn total_len(&self) -> usize {
        self.inner.values().map(Vec::len).sum()
    }

    /// Appends one value to the key's bucket, creating the bucket on first
    /// use.
    pub fn add(&mut self, key: &Json, value: V) {
        self.inner.upsert(key, Vec::new, |_| {}).push(value);
    }

    /// Appends a batch to the key's bucket. An empty batch is a no-op and
    /// does not create the bucket.
    pub fn add_all(&mut self, key: &Json, values: impl IntoIterator<Item = V>) {
        let mut values = values.into_iter();
        if let Some(first) = values.next() {
            let bucket = self.inner.upsert(key, Vec::new, |_| {});
            bucket.push(first);
            bucket.extend(values);
        }
    }

    /// Replaces the key's bucket wholesale.
    pub fn set_list(&mut self, key: &Json, values: Vec<V>) {
        self.inner.insert(key, values);
    }

    /// The key's bucket; empty slice for an absent key, never `None`.
    pub fn get(&self, key: &Json) -> &[V] {
        self.inner.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when the key has a bucket.
    pub fn contains_key(&self, key: &Json) -> bool {
        self.inner.contains_key(key)
    }

    /// Removes and returns the key's bucket.
    pub fn remove(&mut self, key: &Json) -> Option<Vec<V>> {
        self.inner.remove(key)
    }

    /// Drops every bucket.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Buckets in key first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Json, &[V])> {
        self.inner.iter().map(|(key, bucket)| (key, bucket.as_slice()))
    }

    /// Like [`iter`](Self::iter), with the canonical key string included.
    pub fn iter_full(&self) -> impl Iterator<Item = (&str, &Json, &[V])> {
        self.inner
            .iter_full()
            .map(|(key_str, key, bucket)| (key_str, key, bucket.as_slice()))
    }

    /// Stored canonical keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Json> {
        self.inner.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonkit_json::build;

    #[test]
    fn add_all_with_empty_batch_creates_nothing() {
        let mut mm: CanonicalJsonMultiMap<i32> = CanonicalJsonMultiMap::new();
        mm.add_all(&build::num(1.0), std::iter::empty());
        assert!(mm.is_empty());
        assert_eq!(mm.get(&build::num(1.0)), &[] as &[i32]);
    }

    #[test]
    fn set_list_replaces_wholesale() {
        let mut mm = CanonicalJsonMultiMap::new();
        mm.add(&build::str("k"), 1);
        mm.add(&build::str("k"), 2);
        mm.set_list(&build::str("k"), vec![9]);
        assert_eq!(mm.get(&build::str("k")), &[9]);
    }
}
