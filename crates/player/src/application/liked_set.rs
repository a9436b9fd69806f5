//! Persistent record of which scenarios this client has liked
//!
//! The set lives in one storage slot, serialized as a JSON array of
//! scenario ids in ascending order. The format must stay stable: existing
//! installs carry data written by older builds.

use std::collections::BTreeSet;

use scenarium_domain::ScenarioId;

use crate::ports::outbound::{storage_keys, StorageProvider};

/// Repository for the locally persisted liked-scenario set
///
/// Membership is a client-local hint only; the engine keeps its own counts
/// and never sees this set.
pub struct LikedSetStore<S: StorageProvider> {
    storage: S,
}

impl<S: StorageProvider> LikedSetStore<S> {
    /// Create a new store backed by the given storage provider
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the liked set from storage
    ///
    /// A missing slot yields an empty set. So does unreadable data: a
    /// damaged slot is treated the same as never having liked anything.
    pub fn load(&self) -> BTreeSet<ScenarioId> {
        let Some(raw) = self.storage.load(storage_keys::LIKED_SCENARIOS) else {
            return BTreeSet::new();
        };

        match serde_json::from_str::<BTreeSet<ScenarioId>>(&raw) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("Discarding unreadable liked set: {}", e);
                BTreeSet::new()
            }
        }
    }

    /// Save the liked set, replacing whatever the slot held before
    pub fn save(&self, liked: &BTreeSet<ScenarioId>) {
        match serde_json::to_string(liked) {
            Ok(json) => self.storage.save(storage_keys::LIKED_SCENARIOS, &json),
            Err(e) => {
                tracing::error!("Failed to serialize liked set: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, RwLock};

    #[derive(Clone, Default)]
    struct MockStorage {
        data: Arc<RwLock<HashMap<String, String>>>,
    }

    impl StorageProvider for MockStorage {
        fn save(&self, key: &str, value: &str) {
            self.data
                .write()
                .unwrap()
                .insert(key.to_string(), value.to_string());
        }

        fn load(&self, key: &str) -> Option<String> {
            self.data.read().unwrap().get(key).cloned()
        }

        fn remove(&self, key: &str) {
            self.data.write().unwrap().remove(key);
        }
    }

    fn id(raw: u32) -> ScenarioId {
        ScenarioId::new(raw).unwrap()
    }

    #[test]
    fn test_load_empty_when_slot_missing() {
        let store = LikedSetStore::new(MockStorage::default());
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let store = LikedSetStore::new(MockStorage::default());

        let liked: BTreeSet<ScenarioId> = [id(5), id(2), id(9)].into_iter().collect();
        store.save(&liked);

        assert_eq!(store.load(), liked);
    }

    #[test]
    fn test_serialized_form_is_ascending_id_list() {
        let storage = MockStorage::default();
        let store = LikedSetStore::new(storage.clone());

        let liked: BTreeSet<ScenarioId> = [id(9), id(2), id(5)].into_iter().collect();
        store.save(&liked);

        let raw = storage.load(storage_keys::LIKED_SCENARIOS).unwrap();
        assert_eq!(raw, "[2,5,9]");
    }

    #[test]
    fn test_reads_list_written_by_earlier_builds() {
        let storage = MockStorage::default();
        storage.save(storage_keys::LIKED_SCENARIOS, "[1,3,7]");

        let store = LikedSetStore::new(storage);
        let liked = store.load();

        assert_eq!(liked.len(), 3);
        assert!(liked.contains(&id(3)));
    }

    #[test]
    fn test_corrupt_slot_yields_empty_set() {
        let storage = MockStorage::default();
        storage.save(storage_keys::LIKED_SCENARIOS, "not json at all");

        let store = LikedSetStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_list_with_invalid_id_yields_empty_set() {
        let storage = MockStorage::default();
        storage.save(storage_keys::LIKED_SCENARIOS, "[1,0,3]");

        let store = LikedSetStore::new(storage);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_overwrites_previous_set() {
        let store = LikedSetStore::new(MockStorage::default());

        store.save(&[id(1), id(2)].into_iter().collect());
        store.save(&[id(2)].into_iter().collect());

        let liked = store.load();
        assert_eq!(liked.len(), 1);
        assert!(liked.contains(&id(2)));
    }
}
