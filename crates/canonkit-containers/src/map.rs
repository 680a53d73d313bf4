//! Map keyed by canonical Json equality.

use canonkit_core::{canonical_key, HashConsPool};
use canonkit_json::Json;
use std::collections::HashMap;
use std::rc::Rc;

struct Entry<V> {
    key_str: Rc<str>,
    key: Rc<Json>,
    value: V,
}

/// A map whose keys are `Json` values compared by canonical equality.
///
/// Keys are canonicalized and hash-consed through a pool private to the map
/// instance; the canonical key string is the backing-store identity, never
/// the 32-bit fingerprint. Iteration follows first-insertion order:
/// re-inserting an existing canonical key updates the value in place without
/// moving the entry, and removed slots never resurface.
pub struct CanonicalJsonMap<V> {
    pool: HashConsPool,
    index: HashMap<Rc<str>, usize>,
    slots: Vec<Option<Entry<V>>>,
    len: usize,
}

impl<V> Default for CanonicalJsonMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CanonicalJsonMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            pool: HashConsPool::new(),
            index: HashMap::new(),
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no entries are live.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True when a canonically equal key is present.
    pub fn contains_key(&self, key: &Json) -> bool {
        self.index.contains_key(canonical_key(key).as_str())
    }

    /// Looks up by canonical equality.
    pub fn get(&self, key: &Json) -> Option<&V> {
        let slot = *self.index.get(canonical_key(key).as_str())?;
        self.slots[slot].as_ref().map(|entry| &entry.value)
    }

    /// Mutable lookup by canonical equality.
    pub fn get_mut(&mut self, key: &Json) -> Option<&mut V> {
        let slot = *self.index.get(canonical_key(key).as_str())?;
        self.slots[slot].as_mut().map(|entry| &mut entry.value)
    }

    /// Looks up the stored canonical key together with the value.
    pub fn get_entry(&self, key: &Json) -> Option<(&Json, &V)> {
        let slot = *self.index.get(canonical_key(key).as_str())?;
        self.slots[slot]
            .as_ref()
            .map(|entry| (&*entry.key, &entry.value))
    }

    /// Inserts or overwrites, returning the previous value if the canonical
    /// key was present. An overwrite keeps the entry's iteration position;
    /// a new canonical key appends.
    pub fn insert(&mut self, key: &Json, value: V) -> Option<V> {
        let (key_str, key_node) = self.pool.intern_entry(key);
        if let Some(&slot) = self.index.get(&key_str) {
            let entry = self.slots[slot].as_mut().expect("index points at live slot");
            return Some(std::mem::replace(&mut entry.value, value));
        }
        self.slots.push(Some(Entry {
            key_str: key_str.clone(),
            key: key_node,
            value,
        }));
        self.index.insert(key_str, self.slots.len() - 1);
        self.len += 1;
        None
    }

    /// Removes by canonical equality, returning the value.
    pub fn remove(&mut self, key: &Json) -> Option<V> {
        let slot = self.index.remove(canonical_key(key).as_str())?;
        let entry = self.slots[slot].take()?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Drops every entry. The private pool keeps its memo; it is still valid
    /// for any key interned again later.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.len = 0;
    }

    /// Atomic insert-or-update: `on_missing` builds the value for an absent
    /// canonical key, `on_hit` updates a present one. Returns the live
    /// value either way. Every grouping algorithm is built on this.
    pub fn upsert<M, H>(&mut self, key: &Json, on_missing: M, on_hit: H) -> &mut V
    where
        M: FnOnce() -> V,
        H: FnOnce(&mut V),
    {
        let (key_str, key_node) = self.pool.intern_entry(key);
        if let Some(&slot) = self.index.get(&key_str) {
            let entry = self.slots[slot].as_mut().expect("index points at live slot");
            on_hit(&mut entry.value);
            return &mut entry.value;
        }
        self.slots.push(Some(Entry {
            key_str: key_str.clone(),
            key: key_node,
            value: on_missing(),
        }));
        self.index.insert(key_str, self.slots.len() - 1);
        self.len += 1;
        let entry = self
            .slots
            .last_mut()
            .and_then(Option::as_mut)
            .expect("slot just pushed");
        &mut entry.value
    }

    /// Entries in first-insertion order, as (stored canonical key, value).
    pub fn iter(&self) -> impl Iterator<Item = (&Json, &V)> {
        self.slots
            .iter()
            .filter_map(Option::as_ref)
            .map(|entry| (&*entry.key, &entry.value))
    }

    /// Like [`iter`](Self::iter), with the canonical key string included.
    /// Group algorithms use the string for canonical-key tiebreaks.
    pub fn iter_full(&self) -> impl Iterator<Item = (&str, &Json, &V)> {
        self.slots
            .iter()
            .filter_map(Option::as_ref)
            .map(|entry| (&*entry.key_str, &*entry.key, &entry.value))
    }

    /// Stored canonical keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Json> {
        self.iter().map(|(key, _)| key)
    }

    /// Values in first-insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Applies `f` to every entry in first-insertion order.
    pub fn for_each(&self, mut f: impl FnMut(&Json, &V)) {
        for (key, value) in self.iter() {
            f(key, value);
        }
    }

    /// Consumes the map, yielding entries in first-insertion order.
    pub fn into_entries(self) -> impl Iterator<Item = (Rc<Json>, V)> {
        self.slots
            .into_iter()
            .flatten()
            .map(|entry| (entry.key, entry.value))
    }
}

impl<V> FromIterator<(Json, V)> for CanonicalJsonMap<V> {
    fn from_iter<I: IntoIterator<Item = (Json, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(&key, value);
        }
        map
    }
}
