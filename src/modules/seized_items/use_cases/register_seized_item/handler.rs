use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::seized_items::adapters::outbound::seized_item_store::SeizedItemStore;
use crate::modules::seized_items::use_cases::register_seized_item::command::RegisterSeizedItem;
use crate::modules::seized_items::use_cases::register_seized_item::decide::decide_register;
use crate::modules::seized_items::use_cases::register_seized_item::decision::{Decision, References};
use crate::modules::seized_items::use_cases::sync_returned_fields::handler::ReturnedFieldsSynchronizer;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::{RequestContext, non_blank};
use std::sync::Arc;

pub struct RegisterSeizedItemHandler<TStore, TTable>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
    TTable: LookupTable + Send + Sync + 'static,
{
    store: Arc<TStore>,
    item_types: Arc<TTable>,
    depositories: Arc<TTable>,
    synchronizer: ReturnedFieldsSynchronizer<TStore>,
}

impl<TStore, TTable> RegisterSeizedItemHandler<TStore, TTable>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
    TTable: LookupTable + Send + Sync + 'static,
{
    pub fn new(store: Arc<TStore>, item_types: Arc<TTable>, depositories: Arc<TTable>) -> Self {
        Self {
            synchronizer: ReturnedFieldsSynchronizer::new(store.clone()),
            store,
            item_types,
            depositories,
        }
    }

    /// Insert the item and let the returned fields follow its status.
    /// Returns the id of the new item.
    pub async fn handle(
        &self,
        command: RegisterSeizedItem,
        context: &RequestContext,
    ) -> Result<String, ApplicationError> {
        let existing = self.store.get(&command.seized_item_id).await?;
        let references = References {
            item_type_exists: self.item_types.get(&command.item_type_id).await?.is_some(),
            depository_exists: match non_blank(command.depository_id.clone()) {
                Some(depository_id) => self.depositories.get(&depository_id).await?.is_some(),
                None => true,
            },
        };

        match decide_register(existing.as_ref(), command, references, context) {
            Decision::Accepted { row } => {
                let seized_item_id = row.seized_item_id.clone();
                let status = row.status;
                self.store.insert(row).await?;
                self.synchronizer.on_save(&seized_item_id, context).await?;
                tracing::info!(
                    %seized_item_id,
                    %status,
                    by = %context.person_id,
                    "seized item registered"
                );
                Ok(seized_item_id)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
