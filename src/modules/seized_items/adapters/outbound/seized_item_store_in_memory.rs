// In memory implementation of the seized item store and query ports.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Keep rows in a map keyed by seized item id, soft-deleted rows included.
// - Hide soft-deleted rows from every read.

use crate::modules::seized_items::adapters::outbound::seized_item_store::SeizedItemStore;
use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::core::returned_fields::ReturnedFields;
use crate::modules::seized_items::use_cases::list_seized_items::filter::SeizedItemFilter;
use crate::modules::seized_items::use_cases::list_seized_items::projection::SeizedItemView;
use crate::modules::seized_items::use_cases::list_seized_items::queries_port::SeizedItemQueries;
use crate::shared::infrastructure::record_store::{StoreError, paginate};
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemorySeizedItemStore {
    rows: RwLock<HashMap<String, SeizedItemRow>>,
    is_offline: bool,
}

impl InMemorySeizedItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Raw row lookup that also sees soft-deleted rows.
    pub async fn snapshot(&self, seized_item_id: &str) -> Option<SeizedItemRow> {
        self.rows.read().await.get(seized_item_id).cloned()
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Seized item store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SeizedItemStore for InMemorySeizedItemStore {
    async fn insert(&self, row: SeizedItemRow) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        if guard.contains_key(&row.seized_item_id) {
            return Err(StoreError::Duplicate(row.seized_item_id));
        }
        guard.insert(row.seized_item_id.clone(), row);
        Ok(())
    }

    async fn get(&self, seized_item_id: &str) -> Result<Option<SeizedItemRow>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .get(seized_item_id)
            .filter(|row| !row.is_deleted())
            .cloned())
    }

    async fn save(&self, row: SeizedItemRow) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        match guard.get_mut(&row.seized_item_id) {
            Some(existing) if !existing.is_deleted() => {
                let returned = std::mem::take(&mut existing.returned);
                *existing = SeizedItemRow { returned, ..row };
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn set_returned_fields(
        &self,
        seized_item_id: &str,
        fields: ReturnedFields,
    ) -> Result<(), StoreError> {
        self.ensure_online()?;
        if let Some(row) = self
            .rows
            .write()
            .await
            .get_mut(seized_item_id)
            .filter(|row| !row.is_deleted())
        {
            row.returned = fields;
        }
        Ok(())
    }

    async fn soft_delete(
        &self,
        seized_item_id: &str,
        deleted_at: i64,
        deleted_by: &str,
    ) -> Result<bool, StoreError> {
        self.ensure_online()?;
        match self.rows.write().await.get_mut(seized_item_id) {
            Some(row) if !row.is_deleted() => {
                row.touch(deleted_at, deleted_by);
                row.deleted_at = Some(deleted_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn count_by_item_type(&self, item_type_id: &str) -> Result<usize, StoreError> {
        self.ensure_online()?;
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|row| !row.is_deleted() && row.item_type_id == item_type_id)
            .count())
    }

    async fn clear_depository(
        &self,
        depository_id: &str,
        updated_at: i64,
        updated_by: &str,
    ) -> Result<usize, StoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let mut cleared = 0;
        for row in guard.values_mut() {
            if row.is_deleted() || row.depository_id.as_deref() != Some(depository_id) {
                continue;
            }
            row.depository_id = None;
            row.touch(updated_at, updated_by);
            cleared += 1;
        }
        Ok(cleared)
    }
}

#[async_trait::async_trait]
impl SeizedItemQueries for InMemorySeizedItemStore {
    async fn find_by_id(&self, seized_item_id: &str) -> anyhow::Result<Option<SeizedItemView>> {
        Ok(self.get(seized_item_id).await?.map(SeizedItemView::from))
    }

    async fn list(
        &self,
        filter: &SeizedItemFilter,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<SeizedItemView>> {
        self.ensure_online()?;
        let guard = self.rows.read().await;

        let mut items: Vec<SeizedItemRow> = guard
            .values()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        items.sort_by_key(|row| Reverse((row.date, row.seized_item_id.clone())));

        Ok(paginate(items, offset, limit)
            .into_iter()
            .map(SeizedItemView::from)
            .collect())
    }
}
