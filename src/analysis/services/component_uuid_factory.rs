use crate::ports::outbound::{ExistingComponentLookup, UuidSupplier};
use crate::shared::Result;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// Supplies the uuid of a component from its storage key.
///
/// A key already known to storage keeps its uuid. The exact key is tried
/// first, then the key rebuilt from a legacy module path, where an enabled
/// component wins over a disabled one. An unknown key gets a new random
/// uuid. Every answer is cached, so a key resolves to the same uuid for the
/// lifetime of the factory. Create one factory per analysis run.
pub struct ComponentUuidFactory<L: ExistingComponentLookup> {
    lookup: L,
    cache: Arc<DashMap<String, String>>,
}

impl<L: ExistingComponentLookup> ComponentUuidFactory<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Number of keys resolved so far
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn resolve(&self, key: &str) -> Result<String> {
        if let Some(uuid) = self.lookup.uuid_for_key(key)? {
            return Ok(uuid);
        }
        let candidates = self.lookup.uuids_for_legacy_path(key)?;
        let legacy = candidates
            .iter()
            .find(|c| c.enabled)
            .or_else(|| candidates.first());
        if let Some(candidate) = legacy {
            tracing::debug!(key, uuid = %candidate.uuid, "uuid migrated from legacy module path");
            return Ok(candidate.uuid.clone());
        }
        Ok(Uuid::new_v4().to_string())
    }
}

impl<L: ExistingComponentLookup> UuidSupplier for ComponentUuidFactory<L> {
    fn uuid_for(&self, db_key: &str) -> Result<String> {
        if let Some(cached) = self.cache.get(db_key) {
            return Ok(cached.clone());
        }
        let uuid = self.resolve(db_key)?;
        Ok(self
            .cache
            .entry(db_key.to_string())
            .or_insert(uuid)
            .value()
            .clone())
    }
}
