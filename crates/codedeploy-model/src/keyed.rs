// ── Keyed collections ──
//
// String-keyed maps (filter parameters and the like). Insertion refuses
// to overwrite: a repeated key is a caller bug, not an update.

use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A map from string key to value, iterated in key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedCollection<V>(BTreeMap<String, V>);

impl<V> KeyedCollection<V> {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a new entry.
    ///
    /// Fails with [`ModelError::DuplicateKey`] if `key` is already present;
    /// the existing entry is left untouched.
    pub fn try_insert(&mut self, key: impl Into<String>, value: V) -> Result<(), ModelError> {
        match self.0.entry(key.into()) {
            Entry::Occupied(entry) => Err(ModelError::DuplicateKey {
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, V> {
        self.0.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, V> {
        self.0.keys()
    }

    pub fn into_inner(self) -> BTreeMap<String, V> {
        self.0
    }
}

impl<V> Default for KeyedCollection<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<BTreeMap<String, V>> for KeyedCollection<V> {
    fn from(map: BTreeMap<String, V>) -> Self {
        Self(map)
    }
}

impl<'a, V> IntoIterator for &'a KeyedCollection<V> {
    type Item = (&'a String, &'a V);
    type IntoIter = btree_map::Iter<'a, String, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
