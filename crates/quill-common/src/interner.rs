//! String interning.
//!
//! Identifiers (type names, member names, type-parameter names) are interned
//! once and referenced by `Atom` everywhere else, giving O(1) equality and
//! hashing. The intern tables use lock-free reads so a single `Interner` can
//! be shared across concurrently evaluated call sites.

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use std::sync::RwLock;

/// Interned string handle.
///
/// Two `Atom`s compare equal iff the strings they were interned from are
/// equal, provided both came from the same `Interner`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Atom(pub u32);

/// Append-only string intern table.
///
/// Interning and resolution both take `&self`; the table never forgets a
/// string, so resolved `Arc<str>` handles stay valid for the interner's
/// lifetime.
pub struct Interner {
    map: DashMap<Arc<str>, Atom, FxBuildHasher>,
    strings: RwLock<Vec<Arc<str>>>,
}

impl Interner {
    pub fn new() -> Self {
        Self {
            map: DashMap::with_hasher(FxBuildHasher),
            strings: RwLock::new(Vec::new()),
        }
    }

    /// Intern a string, returning its stable `Atom`.
    pub fn intern(&self, text: &str) -> Atom {
        if let Some(existing) = self.map.get(text) {
            return *existing;
        }
        let shared: Arc<str> = Arc::from(text);
        let mut strings = self.strings.write().unwrap_or_else(|e| e.into_inner());
        // Re-check under the write lock: another thread may have interned the
        // same string between the lookup above and acquiring the lock.
        if let Some(existing) = self.map.get(text) {
            return *existing;
        }
        let atom = Atom(strings.len() as u32);
        strings.push(shared.clone());
        self.map.insert(shared, atom);
        atom
    }

    /// Resolve an `Atom` back to its string.
    pub fn resolve(&self, atom: Atom) -> Arc<str> {
        let strings = self.strings.read().unwrap_or_else(|e| e.into_inner());
        strings[atom.0 as usize].clone()
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.strings
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
