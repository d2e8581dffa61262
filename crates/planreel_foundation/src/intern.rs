//! String interning for entity and action identifiers.
//!
//! Plan files repeat the same identifiers on nearly every line
//! (`tru1`, `pos2`, `drive-truck`), so identifiers are interned to enable
//! fast equality comparison and compact per-entity arenas keyed by
//! [`NameId`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned identifier for an entity or action name.
///
/// Comparison and hashing are O(1); the original string is recoverable
/// through the [`Interner`] that produced the id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NameId(pub(crate) u32);

impl NameId {
    /// Returns the raw index of this name.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameId({})", self.0)
    }
}

/// Interner mapping identifier strings to unique [`NameId`]s and back.
///
/// Interning is case-insensitive: plan dialects treat `Tru1` and `tru1`
/// as the same object, so names are folded to lowercase on entry.
/// It is not thread-safe; use external synchronization if needed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interner {
    /// Name storage, indexed by `NameId`.
    names: Vec<Arc<str>>,
    /// Map from name string to its id.
    name_map: HashMap<Arc<str>, NameId>,
}

impl Interner {
    /// Creates a new empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a name, returning its [`NameId`].
    ///
    /// The same string (ignoring ASCII case) always returns the same id.
    ///
    /// # Panics
    ///
    /// Panics if the number of interned names exceeds `u32::MAX`.
    pub fn intern(&mut self, name: &str) -> NameId {
        let folded = name.to_ascii_lowercase();
        if let Some(&id) = self.name_map.get(folded.as_str()) {
            return id;
        }

        let idx = u32::try_from(self.names.len()).expect("too many interned names");
        let arc: Arc<str> = folded.into();
        self.names.push(arc.clone());

        let id = NameId(idx);
        self.name_map.insert(arc, id);
        id
    }

    /// Looks up a previously interned name without inserting.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<NameId> {
        let folded = name.to_ascii_lowercase();
        self.name_map.get(folded.as_str()).copied()
    }

    /// Gets the string for a name id.
    #[must_use]
    pub fn resolve(&self, id: NameId) -> Option<&str> {
        self.names.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Returns the number of interned names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no names have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all interned names in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NameId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, s)| (NameId(u32::try_from(i).expect("interner bounds ids")), s.as_ref()))
    }
}
