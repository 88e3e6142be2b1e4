use crate::modules::seized_items::adapters::outbound::seized_item_store::SeizedItemStore;
use crate::modules::seized_items::core::returned_fields::{
    ReturnedFieldsChange, derive_returned_fields,
};
use crate::shared::core::primitives::RequestContext;
use crate::shared::infrastructure::record_store::StoreError;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Unknown or soft-deleted record.
    Skipped,
    Stamped,
    Cleared,
    Unchanged,
}

/// Runs after every create or update of a seized item and keeps `returned_on`
/// and `returned_by` in line with the saved status.
pub struct ReturnedFieldsSynchronizer<TStore>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ReturnedFieldsSynchronizer<TStore>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn on_save(
        &self,
        seized_item_id: &str,
        context: &RequestContext,
    ) -> Result<SyncOutcome, StoreError> {
        let Some(row) = self.store.get(seized_item_id).await? else {
            tracing::debug!(
                seized_item_id,
                "no live seized item, skipping returned fields"
            );
            return Ok(SyncOutcome::Skipped);
        };

        let change = derive_returned_fields(
            row.status,
            &row.returned,
            context.today,
            &context.person_id,
        );
        let outcome = match change {
            ReturnedFieldsChange::Stamp(_) => SyncOutcome::Stamped,
            ReturnedFieldsChange::Clear => SyncOutcome::Cleared,
            ReturnedFieldsChange::Unchanged => SyncOutcome::Unchanged,
        };

        if let Some(fields) = change.into_update() {
            self.store
                .set_returned_fields(seized_item_id, fields)
                .await?;
        }
        tracing::debug!(seized_item_id, status = %row.status, ?outcome, "returned fields synced");
        Ok(outcome)
    }
}
