use crate::modules::seized_items::adapters::outbound::seized_item_store::SeizedItemStore;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::RequestContext;
use std::sync::Arc;

pub struct DeleteSeizedItemHandler<TStore>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteSeizedItemHandler<TStore>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Flag the item as deleted. The row stays in the store.
    pub async fn handle(
        &self,
        seized_item_id: &str,
        context: &RequestContext,
    ) -> Result<(), ApplicationError> {
        let deleted = self
            .store
            .soft_delete(seized_item_id, context.now_ms, &context.person_id)
            .await?;
        if !deleted {
            return Err(ApplicationError::NotFound(format!(
                "seized item {seized_item_id}"
            )));
        }
        tracing::info!(seized_item_id, by = %context.person_id, "seized item deleted");
        Ok(())
    }
}
