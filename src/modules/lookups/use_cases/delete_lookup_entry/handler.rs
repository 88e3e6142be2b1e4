use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::lookups::core::entry::LookupKind;
use crate::modules::seized_items::adapters::outbound::seized_item_store::SeizedItemStore;
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::RequestContext;
use std::sync::Arc;

/// Soft-deletes a lookup entry. Item types and zone types still in use are
/// kept; seized items lose their depository when it goes away.
pub struct DeleteLookupEntryHandler<TTable, TStore>
where
    TTable: LookupTable + Send + Sync + 'static,
    TStore: SeizedItemStore + Send + Sync + 'static,
{
    table: Arc<TTable>,
    store: Arc<TStore>,
    dependents: Option<Arc<TTable>>,
}

impl<TTable, TStore> DeleteLookupEntryHandler<TTable, TStore>
where
    TTable: LookupTable + Send + Sync + 'static,
    TStore: SeizedItemStore + Send + Sync + 'static,
{
    pub fn new(table: Arc<TTable>, store: Arc<TStore>) -> Self {
        Self {
            table,
            store,
            dependents: None,
        }
    }

    /// Table whose entries point at this one, e.g. zones for zone types.
    pub fn with_dependents(mut self, dependents: Arc<TTable>) -> Self {
        self.dependents = Some(dependents);
        self
    }

    pub async fn handle(&self, id: &str, context: &RequestContext) -> Result<(), ApplicationError> {
        let kind = self.table.kind();
        let not_found = || ApplicationError::NotFound(format!("{} {id}", kind.label()));
        if self.table.get(id).await?.is_none() {
            return Err(not_found());
        }

        match kind {
            LookupKind::ItemType => {
                let in_use = self.store.count_by_item_type(id).await?;
                if in_use > 0 {
                    return Err(ApplicationError::Domain(format!(
                        "item type is still used by {in_use} seized items"
                    )));
                }
            }
            LookupKind::ZoneType => {
                let in_use = match &self.dependents {
                    Some(zones) => zones.count_by_zone_type(id).await?,
                    None => 0,
                };
                if in_use > 0 {
                    return Err(ApplicationError::Domain(format!(
                        "zone type is still used by {in_use} zones"
                    )));
                }
            }
            LookupKind::Depository => {
                let detached = self
                    .store
                    .clear_depository(id, context.now_ms, &context.person_id)
                    .await?;
                tracing::info!(
                    depository_id = id,
                    detached,
                    "seized items detached from depository"
                );
            }
            LookupKind::Checkpoint | LookupKind::Zone | LookupKind::StaffType => {}
        }

        if !self.table.soft_delete(id, context.now_ms).await? {
            return Err(not_found());
        }
        tracing::info!(kind = kind.label(), id, by = %context.person_id, "lookup entry deleted");
        Ok(())
    }
}
