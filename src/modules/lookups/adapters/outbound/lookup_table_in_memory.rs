use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::lookups::core::entry::{LookupEntry, LookupKind};
use crate::shared::infrastructure::record_store::StoreError;
use std::collections::HashMap;
use tokio::sync::RwLock;

pub struct InMemoryLookupTable {
    kind: LookupKind,
    entries: RwLock<HashMap<String, LookupEntry>>,
    is_offline: bool,
}

impl InMemoryLookupTable {
    pub fn new(kind: LookupKind) -> Self {
        Self {
            kind,
            entries: RwLock::new(HashMap::new()),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend(format!(
                "{} table offline",
                self.kind.label()
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LookupTable for InMemoryLookupTable {
    fn kind(&self) -> LookupKind {
        self.kind
    }

    async fn insert(&self, entry: LookupEntry) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        if guard.contains_key(&entry.id) {
            return Err(StoreError::Duplicate(entry.id));
        }
        guard.insert(entry.id.clone(), entry);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<LookupEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .get(id)
            .filter(|entry| !entry.is_deleted())
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<LookupEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .values()
            .find(|entry| !entry.is_deleted() && entry.has_name(name))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<LookupEntry>, StoreError> {
        self.ensure_online()?;
        let mut entries: Vec<LookupEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| !entry.is_deleted())
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.name.to_lowercase(), entry.id.clone()));
        Ok(entries)
    }

    async fn save(&self, entry: LookupEntry) -> Result<bool, StoreError> {
        self.ensure_online()?;
        match self.entries.write().await.get_mut(&entry.id) {
            Some(existing) if !existing.is_deleted() => {
                *existing = entry;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn count_by_zone_type(&self, zone_type_id: &str) -> Result<usize, StoreError> {
        self.ensure_online()?;
        Ok(self
            .entries
            .read()
            .await
            .values()
            .filter(|entry| {
                !entry.is_deleted() && entry.zone_type_id.as_deref() == Some(zone_type_id)
            })
            .count())
    }

    async fn soft_delete(&self, id: &str, deleted_at: i64) -> Result<bool, StoreError> {
        self.ensure_online()?;
        match self.entries.write().await.get_mut(id) {
            Some(entry) if !entry.is_deleted() => {
                entry.deleted_at = Some(deleted_at);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
