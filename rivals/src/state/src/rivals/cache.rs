use codee::{string::JsonSerdeCodec, Decoder, Encoder};
use consts::RIVALS_CACHE_KEY;
use utils::storage::{KvStore, MemoryStore};

use super::models::RivalrySnapshot;

/// Single-slot persistence of the last computed snapshot.
///
/// Reads never fail: a missing or undecodable slot is a cache miss.
pub trait RivalryCache {
    fn load(&self) -> RivalrySnapshot;

    fn save(&self, snapshot: &RivalrySnapshot);

    fn clear(&self);

    fn has_cache(&self) -> bool {
        !self.load().is_empty()
    }
}

/// [`RivalryCache`] over any [`KvStore`], JSON encoded under one well-known key.
pub struct StoredRivalryCache<S> {
    store: S,
    key: String,
}

pub type MemoryRivalryCache = StoredRivalryCache<MemoryStore>;

impl<S: KvStore> StoredRivalryCache<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, RIVALS_CACHE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl MemoryRivalryCache {
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::default())
    }
}

impl<S: KvStore> RivalryCache for StoredRivalryCache<S> {
    fn load(&self) -> RivalrySnapshot {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read rivals cache: {e}");
                return Vec::new();
            }
        };

        match <JsonSerdeCodec as Decoder<RivalrySnapshot>>::decode(raw.as_str()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("discarding undecodable rivals cache: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, snapshot: &RivalrySnapshot) {
        let encoded = match <JsonSerdeCodec as Encoder<RivalrySnapshot>>::encode(snapshot) {
            Ok(encoded) => encoded,
            Err(e) => {
                log::warn!("failed to encode rivals snapshot: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &encoded) {
            log::warn!("failed to write rivals cache: {e}");
        }
    }

    fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            log::warn!("failed to clear rivals cache: {e}");
        }
    }
}
