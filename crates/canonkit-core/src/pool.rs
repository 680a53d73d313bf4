//! Hash-consing pool.
//!
//! An explicit interner with a create→use→drop lifecycle: no global state,
//! no eviction. For a fixed pool, canonically equal inputs intern to the
//! same `Rc` handle, across independent top-level calls. The pool is a
//! strict monotonic memo for its lifetime; callers that share one across
//! threads must serialize access themselves (the engine is single-threaded
//! by design, hence `Rc`).

use canonkit_json::Json;
use std::collections::HashMap;
use std::rc::Rc;

use crate::canonicalize::canonicalize;
use crate::key::key_of_canonical;

/// Memo table mapping canonical keys to shared canonical nodes.
#[derive(Debug, Default)]
pub struct HashConsPool {
    table: HashMap<Rc<str>, Rc<Json>>,
}

impl HashConsPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Number of distinct canonical subtrees interned so far.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Canonicalizes the value and interns its canonical form, returning the
    /// shared handle. Every canonical subtree encountered on the way is
    /// interned too, so later lookups of any equal subtree hit the memo.
    pub fn intern(&mut self, json: &Json) -> Rc<Json> {
        self.intern_entry(json).1
    }

    /// Like [`intern`](Self::intern), but also returns the canonical key the
    /// node is memoized under. Containers use this to key their backing
    /// store without re-serializing.
    pub fn intern_entry(&mut self, json: &Json) -> (Rc<str>, Rc<Json>) {
        let canonical = canonicalize(json);
        self.intern_canonical(&canonical)
    }

    fn intern_canonical(&mut self, canonical: &Json) -> (Rc<str>, Rc<Json>) {
        // Children first, so the memo covers every canonical subtree.
        match canonical {
            Json::Arr(items) | Json::Set(items) => {
                for item in items {
                    self.intern_canonical(item);
                }
            }
            Json::Obj(entries) => {
                for (_, value) in entries {
                    self.intern_canonical(value);
                }
            }
            _ => {}
        }

        let key = key_of_canonical(canonical);
        if let Some((stored_key, node)) = self.table.get_key_value(key.as_str()) {
            return (stored_key.clone(), node.clone());
        }
        let stored_key: Rc<str> = Rc::from(key);
        let node = Rc::new(canonical.clone());
        self.table.insert(stored_key.clone(), node.clone());
        (stored_key, node)
    }
}

/// Interns through the supplied pool.
pub fn hash_cons(json: &Json, pool: &mut HashConsPool) -> Rc<Json> {
    pool.intern(json)
}

/// Interns through a fresh single-use pool (the create-per-call shape).
/// Sharing only happens across calls when callers keep a pool alive.
pub fn hash_cons_fresh(json: &Json) -> Rc<Json> {
    HashConsPool::new().intern(json)
}
