use async_trait::async_trait;

use crate::modules::lookups::core::entry::{LookupEntry, LookupKind};
use crate::shared::infrastructure::record_store::StoreError;

/// One named lookup table. Reads skip soft-deleted entries.
#[async_trait]
pub trait LookupTable: Send + Sync {
    fn kind(&self) -> LookupKind;

    async fn insert(&self, entry: LookupEntry) -> Result<(), StoreError>;

    async fn get(&self, id: &str) -> Result<Option<LookupEntry>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<LookupEntry>, StoreError>;

    /// Live entries ordered by name.
    async fn list(&self) -> Result<Vec<LookupEntry>, StoreError>;

    /// Replace a live entry. Returns `false` when there is nothing to replace.
    async fn save(&self, entry: LookupEntry) -> Result<bool, StoreError>;

    /// Live entries pointing at the zone type.
    async fn count_by_zone_type(&self, zone_type_id: &str) -> Result<usize, StoreError>;

    async fn soft_delete(&self, id: &str, deleted_at: i64) -> Result<bool, StoreError>;
}
