//! Entity Store
//!
//! An ordered in-memory collection of records with create, update and
//! delete operations. Ordering is insertion order and every mutation
//! preserves the relative order of untouched records.

use serde::{Deserialize, Serialize};

use crate::model::{Record, RecordId};

/// How the store picks the id of a newly created record
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Largest existing id plus one (`1` for an empty collection)
    #[default]
    MaxPlusOne,
    /// Collection length plus one. Collides with an existing id after a delete.
    LengthPlusOne,
}

impl IdStrategy {
    /// `None` once the id space is exhausted
    pub fn next_id<T: Record>(&self, records: &[T]) -> Option<RecordId> {
        match self {
            IdStrategy::MaxPlusOne => records.iter().map(Record::id).max().unwrap_or(0).checked_add(1),
            IdStrategy::LengthPlusOne => RecordId::try_from(records.len()).ok()?.checked_add(1),
        }
    }
}

/// In-memory collection of one entity type
#[derive(Clone, Debug, PartialEq)]
pub struct EntityStore<T> {
    records: Vec<T>,
    id_strategy: IdStrategy,
}

impl<T: Record> EntityStore<T> {
    pub fn new(records: Vec<T>, id_strategy: IdStrategy) -> Self {
        Self {
            records,
            id_strategy,
        }
    }

    /// Read-only snapshot in collection order
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn next_id(&self) -> Option<RecordId> {
        self.id_strategy.next_id(&self.records)
    }

    /// Append a record built from a freshly assigned id. Returns `None`,
    /// leaving the collection untouched, when no id is left to assign.
    pub fn create(&mut self, build: impl FnOnce(RecordId) -> T) -> Option<RecordId> {
        let Some(id) = self.next_id() else {
            tracing::warn!(kind = T::KIND, "Create ignored, no id left to assign");
            return None;
        };
        self.records.push(build(id));
        tracing::debug!(kind = T::KIND, id, "Created record");
        Some(id)
    }

    /// Replace the record with the same id. Returns `false` if none matched.
    pub fn update(&mut self, record: T) -> bool {
        let id = record.id();
        match self.records.iter_mut().find(|r| r.id() == id) {
            Some(existing) => {
                *existing = record;
                tracing::debug!(kind = T::KIND, id, "Updated record");
                true
            }
            None => {
                tracing::warn!(kind = T::KIND, id, "Update ignored, no record with this id");
                false
            }
        }
    }

    /// Remove the record with this id. Returns `false` if none matched.
    pub fn delete(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);

        let removed = self.records.len() != before;
        if removed {
            tracing::debug!(kind = T::KIND, id, "Deleted record");
        } else {
            tracing::warn!(kind = T::KIND, id, "Delete ignored, no record with this id");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{User, UserStatus};

    fn user(id: RecordId, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            role: "Viewer".to_string(),
            status: UserStatus::Active,
        }
    }

    fn ids(store: &EntityStore<User>) -> Vec<RecordId> {
        store.records().iter().map(|u| u.id).collect()
    }

    fn store(strategy: IdStrategy) -> EntityStore<User> {
        EntityStore::new(vec![user(1, "Ann"), user(2, "Ben"), user(3, "Cy")], strategy)
    }

    #[test]
    fn test_create_appends_with_next_id() {
        let mut users = store(IdStrategy::MaxPlusOne);
        let id = users.create(|id| user(id, "Dee"));
        assert_eq!(id, Some(4));
        assert_eq!(users.records().len(), 4);
        assert_eq!(users.records().last().map(|u| u.name.as_str()), Some("Dee"));
    }

    #[test]
    fn test_create_into_empty_store_starts_at_one() {
        let mut users = EntityStore::new(Vec::new(), IdStrategy::MaxPlusOne);
        assert_eq!(users.create(|id| user(id, "Ann")), Some(1));
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut users = store(IdStrategy::MaxPlusOne);
        assert!(users.delete(2));
        assert_eq!(ids(&users), vec![1, 3]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut users = store(IdStrategy::MaxPlusOne);
        assert!(!users.delete(42));
        assert_eq!(ids(&users), vec![1, 2, 3]);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut users = store(IdStrategy::MaxPlusOne);
        let mut ben = users.records()[1].clone();
        ben.status = UserStatus::Inactive;
        assert!(users.update(ben));
        assert_eq!(ids(&users), vec![1, 2, 3]);
        assert_eq!(users.records()[1].status, UserStatus::Inactive);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut users = store(IdStrategy::MaxPlusOne);
        let before = users.clone();
        assert!(!users.update(user(9, "Ghost")));
        assert_eq!(users, before);
    }

    #[test]
    fn test_max_plus_one_avoids_collision_after_delete() {
        let mut users = store(IdStrategy::MaxPlusOne);
        users.delete(2);
        assert_eq!(users.create(|id| user(id, "Dee")), Some(4));
        assert_eq!(ids(&users), vec![1, 3, 4]);
    }

    #[test]
    fn test_length_plus_one_collides_after_delete() {
        let mut users = store(IdStrategy::LengthPlusOne);
        users.delete(2);
        assert_eq!(users.create(|id| user(id, "Dee")), Some(3));
        assert_eq!(ids(&users), vec![1, 3, 3]);
    }

    #[test]
    fn test_create_at_max_id_is_refused() {
        let mut users = EntityStore::new(vec![user(RecordId::MAX, "Max")], IdStrategy::MaxPlusOne);
        assert_eq!(users.next_id(), None);
        assert_eq!(users.create(|id| user(id, "Dee")), None);
        assert_eq!(ids(&users), vec![RecordId::MAX]);
    }
}
