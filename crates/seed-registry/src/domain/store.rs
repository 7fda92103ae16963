//! # Variety Store
//!
//! Owns the primary table (id -> variety), the uniqueness index
//! (hash -> id), the latest-update table and the id counter.
//!
//! The two indexes are only written together, through [`VarietyStore::insert`].
//! Neither map is exposed for mutation.

use crate::domain::entities::{Variety, VarietyUpdate};
use crate::domain::value_objects::{BlockHeight, Principal, SeedHash, VarietyId};
use std::collections::{BTreeMap, HashMap};

/// In-memory repository of registered varieties.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VarietyStore {
    varieties: BTreeMap<VarietyId, Variety>,
    by_hash: HashMap<SeedHash, VarietyId>,
    updates: HashMap<VarietyId, VarietyUpdate>,
    next_id: VarietyId,
}

impl VarietyStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next insert will receive. Also the number of issued ids.
    #[must_use]
    pub fn next_id(&self) -> VarietyId {
        self.next_id
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.varieties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.varieties.is_empty()
    }

    pub(crate) fn hash_index_len(&self) -> usize {
        self.by_hash.len()
    }

    #[must_use]
    pub fn get(&self, id: VarietyId) -> Option<&Variety> {
        self.varieties.get(&id)
    }

    #[must_use]
    pub fn id_by_hash(&self, hash: &SeedHash) -> Option<VarietyId> {
        self.by_hash.get(hash).copied()
    }

    #[must_use]
    pub fn contains_hash(&self, hash: &SeedHash) -> bool {
        self.by_hash.contains_key(hash)
    }

    #[must_use]
    pub fn latest_update(&self, id: VarietyId) -> Option<&VarietyUpdate> {
        self.updates.get(&id)
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = (VarietyId, &Variety)> + '_ {
        self.varieties.iter().map(|(id, variety)| (*id, variety))
    }

    /// Stores a new record under the next id and indexes its hash.
    ///
    /// The caller must have checked that the hash is not yet present.
    pub fn insert(&mut self, variety: Variety) -> VarietyId {
        debug_assert!(!self.by_hash.contains_key(&variety.hash));
        let id = self.next_id;
        self.by_hash.insert(variety.hash, id);
        self.varieties.insert(id, variety);
        self.next_id += 1;
        id
    }

    /// Replaces title, description and timestamp of an existing record and
    /// overwrites its retained update entry.
    ///
    /// Returns false if there is no record at `id`.
    pub fn apply_update(
        &mut self,
        id: VarietyId,
        title: String,
        description: String,
        at: BlockHeight,
        updater: Principal,
    ) -> bool {
        let Some(variety) = self.varieties.get_mut(&id) else {
            return false;
        };
        variety.title.clone_from(&title);
        variety.description.clone_from(&description);
        variety.timestamp = at;
        self.updates.insert(
            id,
            VarietyUpdate {
                update_title: title,
                update_description: description,
                update_timestamp: at,
                updater,
            },
        );
        true
    }
}

// =============================================================================
// TESTS
// =============================================================================
