use super::errors::{StoreError, StoreResult};
use super::store::EntityStore;
use crate::entities::Entity;

use tokio::sync::Mutex;

/// Generic create/list/update/delete over one `EntityStore`.
///
/// Each collection owns its own lock, so requests against `/cars` never wait on
/// requests against `/flowers`. Within one collection every operation holds the lock
/// from the id/scan step through the mutation, which keeps a concurrent `list` from
/// observing a half-applied change.
pub struct Collection<T> {
    store: Mutex<EntityStore<T>>,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(EntityStore::new()),
        }
    }

    /// Name the collection is served under.
    #[cfg(test)]
    pub fn name(&self) -> &'static str {
        T::COLLECTION
    }

    /// Assigns a fresh identifier to `entity` (whatever id it carried is discarded),
    /// appends it and returns the stored value.
    pub async fn create(&self, mut entity: T) -> T {
        let mut store = self.store.lock().await;

        let id = store.next_identifier();
        entity.set_id(id);
        store.append(entity.clone());

        tracing::info!("Created {} entity with id {}", T::COLLECTION, id);
        entity
    }

    /// Snapshot of every entity in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let store = self.store.lock().await;
        tracing::debug!("Listing {} ({} entities)", T::COLLECTION, store.len());
        store.items().to_vec()
    }

    /// Replaces the entity whose id equals `entity.id()` with `entity` wholesale.
    ///
    /// The payload's own id is both the lookup key and the stored id.
    pub async fn update(&self, entity: T) -> StoreResult<T> {
        let id = entity.id();
        let mut store = self.store.lock().await;

        let Some(index) = store.find_index_by_id(id) else {
            tracing::warn!("Update on {}: id {} not found", T::COLLECTION, id);
            return Err(StoreError::NotFound);
        };
        store.replace_at(index, entity.clone())?;

        tracing::info!("Updated {} entity with id {}", T::COLLECTION, id);
        Ok(entity)
    }

    /// Removes the entity with `id`. The id counter is left untouched.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        let mut store = self.store.lock().await;

        let Some(index) = store.find_index_by_id(id) else {
            tracing::warn!("Delete on {}: id {} not found", T::COLLECTION, id);
            return Err(StoreError::NotFound);
        };
        store.remove_at(index)?;

        tracing::info!("Deleted {} entity with id {}", T::COLLECTION, id);
        Ok(())
    }

    /// Parses a raw `id` query value and deletes the matching entity.
    ///
    /// A missing or non-integer value fails before the lock is taken.
    pub async fn delete_raw(&self, raw_id: Option<&str>) -> StoreResult<()> {
        let id = parse_id(raw_id)?;
        self.delete(id).await
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a base-10 signed 64-bit identifier.
pub fn parse_id(raw_id: Option<&str>) -> StoreResult<i64> {
    let raw = raw_id.unwrap_or_default();
    raw.parse::<i64>().map_err(|e| {
        tracing::warn!("Rejected id {:?}: {}", raw, e);
        StoreError::InvalidId(raw.to_string())
    })
}
