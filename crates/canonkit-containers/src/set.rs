//! Set keyed by canonical Json equality.

use crate::map::CanonicalJsonMap;
use canonkit_json::Json;

/// A set of `Json` values compared by canonical equality, implemented
/// strictly as a [`CanonicalJsonMap`] with unit values. Iteration yields the
/// stored, hash-consed canonical form, not the original input, in
/// first-insertion order.
#[derive(Default)]
pub struct CanonicalJsonSet {
    inner: CanonicalJsonMap<()>,
}

impl CanonicalJsonSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            inner: CanonicalJsonMap::new(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// True when no members are present.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Adds a member; returns true when it was not already present.
    pub fn insert(&mut self, value: &Json) -> bool {
        self.inner.insert(value, ()).is_none()
    }

    /// True when a canonically equal member is present.
    pub fn contains(&self, value: &Json) -> bool {
        self.inner.contains_key(value)
    }

    /// Removes a member; returns true when it was present.
    pub fn remove(&mut self, value: &Json) -> bool {
        self.inner.remove(value).is_some()
    }

    /// Drops every member.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Members (canonical, hash-consed) in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Json> {
        self.inner.keys()
    }
}

impl FromIterator<Json> for CanonicalJsonSet {
    fn from_iter<I: IntoIterator<Item = Json>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(&value);
        }
        set
    }
}
