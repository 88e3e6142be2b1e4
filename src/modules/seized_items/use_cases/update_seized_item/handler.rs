use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::seized_items::adapters::outbound::seized_item_store::SeizedItemStore;
use crate::modules::seized_items::use_cases::list_seized_items::projection::SeizedItemView;
use crate::modules::seized_items::use_cases::register_seized_item::decision::{Decision, References};
use crate::modules::seized_items::use_cases::sync_returned_fields::handler::ReturnedFieldsSynchronizer;
use crate::modules::seized_items::use_cases::update_seized_item::command::UpdateSeizedItem;
use crate::modules::seized_items::use_cases::update_seized_item::decide::decide_update;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::RequestContext;
use std::sync::Arc;

pub struct UpdateSeizedItemHandler<TStore, TTable>
where
    TStore: SeizedItemStore + Send + Sync + 'static,
    TTable: LookupTable + Send + Sync + 'static,
{
    store: Arc<TStore>,
    item_types: Arc<TTable>,
    depositories: Arc<TTable>,
    synchronizer: ReturnedFieldsSynchronizer<TStore>,
}

impl<TStore, TTable> UpdateSeizedItemHandler<TStore, TTable>
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

    pub async fn handle(
        &self,
        seized_item_id: &str,
        patch: UpdateSeizedItem,
        context: &RequestContext,
    ) -> Result<SeizedItemView, ApplicationError> {
        let not_found = || ApplicationError::NotFound(format!("seized item {seized_item_id}"));

        let current = self.store.get(seized_item_id).await?.ok_or_else(not_found)?;
        let references = References {
            item_type_exists: match patch.referenced_item_type() {
                Some(item_type_id) => self.item_types.get(&item_type_id).await?.is_some(),
                None => true,
            },
            depository_exists: match patch.referenced_depository() {
                Some(depository_id) => self.depositories.get(&depository_id).await?.is_some(),
                None => true,
            },
        };

        match decide_update(current, patch, references, context) {
            Decision::Accepted { row } => {
                let status = row.status;
                if !self.store.save(row).await? {
                    return Err(not_found());
                }
                let outcome = self.synchronizer.on_save(seized_item_id, context).await?;
                tracing::info!(
                    seized_item_id,
                    %status,
                    ?outcome,
                    by = %context.person_id,
                    "seized item updated"
                );
                let saved = self.store.get(seized_item_id).await?.ok_or_else(not_found)?;
                Ok(SeizedItemView::from(saved))
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason.to_string())),
        }
    }
}
