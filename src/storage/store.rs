use super::errors::{StoreError, StoreResult};
use crate::entities::Entity;

/// Ordered in-memory sequence of one entity shape plus its identifier counter.
///
/// Holds no lock of its own: every method assumes the caller already has exclusive
/// access (see `Collection`).
#[derive(Debug)]
pub struct EntityStore<T> {
    items: Vec<T>,
    next_id: i64,
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
        }
    }

    /// Issues a fresh identifier. The counter only grows, so ids of deleted
    /// entities are never handed out again and the first id is 1.
    pub fn next_identifier(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn append(&mut self, entity: T) {
        self.items.push(entity);
    }

    /// Position of the first entity carrying `id`, if any.
    pub fn find_index_by_id(&self, id: i64) -> Option<usize> {
        self.items.iter().position(|entity| entity.id() == id)
    }

    /// Removes the entity at `index`, keeping the relative order of the rest.
    pub fn remove_at(&mut self, index: usize) -> StoreResult<T> {
        if index >= self.items.len() {
            return Err(StoreError::NotFound);
        }
        Ok(self.items.remove(index))
    }

    pub fn replace_at(&mut self, index: usize, entity: T) -> StoreResult<()> {
        match self.items.get_mut(index) {
            Some(slot) => {
                *slot = entity;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn last_issued_id(&self) -> i64 {
        self.next_id
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
