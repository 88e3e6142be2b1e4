use async_trait::async_trait;

use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::core::returned_fields::ReturnedFields;
use crate::shared::infrastructure::record_store::StoreError;

/// Write side of the seized item registry.
///
/// Reads through this port never return soft-deleted rows.
#[async_trait]
pub trait SeizedItemStore: Send + Sync {
    async fn insert(&self, row: SeizedItemRow) -> Result<(), StoreError>;

    async fn get(&self, seized_item_id: &str) -> Result<Option<SeizedItemRow>, StoreError>;

    /// Replace a live row, keeping its stored returned fields; only
    /// `set_returned_fields` writes those. Returns `false` when there is
    /// nothing to replace.
    async fn save(&self, row: SeizedItemRow) -> Result<bool, StoreError>;

    async fn set_returned_fields(
        &self,
        seized_item_id: &str,
        fields: ReturnedFields,
    ) -> Result<(), StoreError>;

    /// Flag the row as deleted. Returns `false` when it is unknown or already deleted.
    async fn soft_delete(
        &self,
        seized_item_id: &str,
        deleted_at: i64,
        deleted_by: &str,
    ) -> Result<bool, StoreError>;

    async fn count_by_item_type(&self, item_type_id: &str) -> Result<usize, StoreError>;

    /// Detach every live row from the depository, returning how many were touched.
    async fn clear_depository(
        &self,
        depository_id: &str,
        updated_at: i64,
        updated_by: &str,
    ) -> Result<usize, StoreError>;
}
