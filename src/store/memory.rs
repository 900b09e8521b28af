//! In-memory material store
//!
//! Same contract as the PostgreSQL store: ids ascend from 1, both
//! timestamps are equal at creation and `updated_at` strictly increases
//! on every update.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{Duration, NaiveDateTime, SubsecRound, Utc};

use crate::model::{Material, MaterialDraft, MaterialPatch};

use super::errors::{StoreError, StoreResult};
use super::MaterialStore;

#[derive(Debug, Default)]
struct Table {
    last_id: i32,
    rows: BTreeMap<i32, Material>,
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryMaterialStore {
    table: RwLock<Table>,
    unavailable: AtomicBool,
}

impl MemoryMaterialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a lost database: every call behaves as if the connection
    /// could not be opened.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Connection("store unavailable".to_string()));
        }
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Table> {
        self.table.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Table> {
        self.table.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Current time at the column precision (microseconds)
fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

#[async_trait]
impl MaterialStore for MemoryMaterialStore {
    async fn ensure_schema(&self) -> StoreResult<()> {
        self.check_available()
    }

    async fn list(&self) -> StoreResult<Vec<Material>> {
        if self.check_available().is_err() {
            return Ok(Vec::new());
        }
        Ok(self.read().rows.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> StoreResult<Material> {
        self.check_available()?;
        self.read()
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create(&self, draft: MaterialDraft) -> StoreResult<Material> {
        self.check_available()?;
        let mut table = self.write();

        table.last_id += 1;
        let created = now();
        let material = Material {
            id: table.last_id,
            name: draft.name,
            description: draft.description,
            created_at: Some(created),
            updated_at: Some(created),
        };
        table.rows.insert(material.id, material.clone());
        Ok(material)
    }

    async fn update(&self, id: i32, patch: MaterialPatch) -> StoreResult<Material> {
        self.check_available()?;

        let mut table = self.write();
        let material = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        // A missing row is reported before a rejected patch.
        let patch = patch.validate()?;
        patch.apply_to(material);
        let mut updated = now();
        if let Some(previous) = material.updated_at {
            if updated <= previous {
                updated = previous + Duration::microseconds(1);
            }
        }
        material.updated_at = Some(updated);
        Ok(material.clone())
    }

    async fn delete(&self, id: i32) -> StoreResult<()> {
        self.check_available()?;
        self.write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewMaterial, ValidationError};

    fn draft(name: &str, description: &str) -> MaterialDraft {
        NewMaterial::new(name, description).validate().unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_equal_timestamps() {
        let store = MemoryMaterialStore::new();
        let material = store
            .create(draft("Parafuso M6x30", "Parafuso sextavado métrico 6mm x 30mm"))
            .await
            .unwrap();

        assert_eq!(material.id, 1);
        assert!(material.created_at.is_some());
        assert_eq!(material.created_at, material.updated_at);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let store = MemoryMaterialStore::new();
        for name in ["c", "a", "b"] {
            store.create(draft(name, "x")).await.unwrap();
        }
        let ids: Vec<i32> = store.list().await.unwrap().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_update_name_only_advances_updated_at() {
        let store = MemoryMaterialStore::new();
        let before = store.create(draft("Porca M6", "Porca sextavada")).await.unwrap();

        let after = store
            .update(before.id, MaterialPatch::default().name("Porca M6 inox"))
            .await
            .unwrap();

        assert_eq!(after.name, "Porca M6 inox");
        assert_eq!(after.description, before.description);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at > before.updated_at);
    }

    #[tokio::test]
    async fn test_update_missing_id_writes_nothing() {
        let store = MemoryMaterialStore::new();
        store.create(draft("a", "b")).await.unwrap();

        let err = store
            .update(42, MaterialPatch::default().name("z"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(42)));
        assert_eq!(store.get(1).await.unwrap().name, "a");
    }

    #[tokio::test]
    async fn test_update_without_fields() {
        let store = MemoryMaterialStore::new();
        store.create(draft("a", "b")).await.unwrap();

        let err = store.update(1, MaterialPatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid(ValidationError::NoFields)));
    }

    #[tokio::test]
    async fn test_update_missing_id_wins_over_empty_patch() {
        let store = MemoryMaterialStore::new();

        let err = store.update(5, MaterialPatch::default()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(5)));

        let err = store
            .update(5, MaterialPatch::default().name(" "))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(5)));
    }

    #[tokio::test]
    async fn test_rejected_patch_leaves_row_untouched() {
        let store = MemoryMaterialStore::new();
        let before = store.create(draft("a", "b")).await.unwrap();

        let err = store
            .update(1, MaterialPatch::default().name("z").description(""))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(ValidationError::Blank(_))));
        assert_eq!(store.get(1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let store = MemoryMaterialStore::new();
        let material = store.create(draft("a", "b")).await.unwrap();

        store.delete(material.id).await.unwrap();
        assert!(matches!(
            store.get(material.id).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete(material.id).await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryMaterialStore::new();
        store.create(draft("a", "b")).await.unwrap();
        store.delete(1).await.unwrap();
        let next = store.create(draft("c", "d")).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_unavailable_store() {
        let store = MemoryMaterialStore::new();
        store.create(draft("a", "b")).await.unwrap();
        store.set_unavailable(true);

        assert!(store.list().await.unwrap().is_empty());
        assert!(matches!(
            store.create(draft("c", "d")).await,
            Err(StoreError::Connection(_))
        ));
        assert_eq!(store.len(), 1);
    }
}
