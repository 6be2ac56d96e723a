//! `ParcelRegistry<V>` — every parcel ever created, keyed by identifier.
//!
//! Records live in a `Vec` indexed by [`ParcelKey`]; a hash index maps the
//! caller's identifier string to the slot.  There is no removal, so keys stay
//! valid for the whole run and cancelled or delivered parcels remain
//! queryable.
//!
//! Inserting an identifier that already exists overwrites the record in its
//! existing slot (upsert).  The number of distinct identifiers is bounded by
//! the configured capacity; a new identifier beyond it is rejected with
//! [`DispatchError::RegistryFull`] and nothing is stored.

use pn_core::ParcelKey;

use crate::{DispatchError, DispatchResult};

#[cfg(feature = "fx-hash")]
type IdIndex = rustc_hash::FxHashMap<String, ParcelKey>;
#[cfg(not(feature = "fx-hash"))]
type IdIndex = std::collections::HashMap<String, ParcelKey>;

/// Capacity used when none is configured.
pub const DEFAULT_REGISTRY_CAPACITY: usize = 1007;

pub struct ParcelRegistry<V> {
    capacity: usize,
    index:    IdIndex,
    ids:      Vec<String>,
    records:  Vec<V>,
}

impl<V> ParcelRegistry<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            index:   IdIndex::default(),
            ids:     Vec::new(),
            records: Vec::new(),
        }
    }

    /// Insert or overwrite the record for `id`, returning its slot.
    pub fn insert(&mut self, id: &str, value: V) -> DispatchResult<ParcelKey> {
        if let Some(&key) = self.index.get(id) {
            self.records[key.index()] = value;
            return Ok(key);
        }
        if self.records.len() >= self.capacity {
            return Err(DispatchError::RegistryFull { capacity: self.capacity });
        }
        let key = ParcelKey(self.records.len() as u32);
        self.index.insert(id.to_owned(), key);
        self.ids.push(id.to_owned());
        self.records.push(value);
        Ok(key)
    }

    /// Slot of `id`, if it was ever inserted.
    pub fn key_of(&self, id: &str) -> Option<ParcelKey> {
        self.index.get(id).copied()
    }

    pub fn search(&self, id: &str) -> Option<&V> {
        self.key_of(id).map(|k| &self.records[k.index()])
    }

    pub fn search_mut(&mut self, id: &str) -> Option<&mut V> {
        let key = self.key_of(id)?;
        self.records.get_mut(key.index())
    }

    pub fn get(&self, key: ParcelKey) -> Option<&V> {
        self.records.get(key.index())
    }

    pub fn get_mut(&mut self, key: ParcelKey) -> Option<&mut V> {
        self.records.get_mut(key.index())
    }

    /// Identifier stored in slot `key`.
    pub fn id_of(&self, key: ParcelKey) -> Option<&str> {
        self.ids.get(key.index()).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `(key, record)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParcelKey, &V)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, v)| (ParcelKey(i as u32), v))
    }
}

impl<V> Default for ParcelRegistry<V> {
    fn default() -> Self {
        Self::new(DEFAULT_REGISTRY_CAPACITY)
    }
}
