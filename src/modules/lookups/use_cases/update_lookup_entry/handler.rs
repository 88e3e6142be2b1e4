use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::lookups::core::entry::LookupEntryView;
use crate::modules::lookups::use_cases::create_lookup_entry::handler::reference_exists;
use crate::modules::lookups::use_cases::update_lookup_entry::command::UpdateLookupEntry;
use crate::modules::lookups::use_cases::update_lookup_entry::decide::{UpdateChecks, decide_update};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::RequestContext;
use std::sync::Arc;

pub struct UpdateLookupEntryHandler<TTable>
where
    TTable: LookupTable + Send + Sync + 'static,
{
    table: Arc<TTable>,
    referenced: Option<Arc<TTable>>,
}

impl<TTable> UpdateLookupEntryHandler<TTable>
where
    TTable: LookupTable + Send + Sync + 'static,
{
    pub fn new(table: Arc<TTable>) -> Self {
        Self {
            table,
            referenced: None,
        }
    }

    /// Table that `zone_type_id` is checked against.
    pub fn with_reference(mut self, referenced: Arc<TTable>) -> Self {
        self.referenced = Some(referenced);
        self
    }

    pub async fn handle(
        &self,
        id: &str,
        patch: UpdateLookupEntry,
        context: &RequestContext,
    ) -> Result<LookupEntryView, ApplicationError> {
        let kind = self.table.kind();
        let not_found = || ApplicationError::NotFound(format!("{} {id}", kind.label()));
        let current = self.table.get(id).await?.ok_or_else(not_found)?;

        let name_taken = match patch.name.as_deref() {
            Some(name) if kind.deduplicates_by_name() => self
                .table
                .find_by_name(name)
                .await?
                .is_some_and(|other| other.id != id),
            _ => false,
        };
        let checks = UpdateChecks {
            name_taken,
            zone_type_exists: reference_exists(
                self.referenced.as_deref(),
                patch.zone_type_id.clone(),
            )
            .await?,
        };

        let updated = decide_update(kind, current, patch, checks, context)
            .map_err(|reason| ApplicationError::Domain(reason.to_string()))?;
        if !self.table.save(updated.clone()).await? {
            return Err(not_found());
        }
        tracing::info!(kind = kind.label(), id, by = %context.person_id, "lookup entry updated");
        Ok(updated.into())
    }
}
