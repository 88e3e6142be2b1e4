use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::lookups::use_cases::create_lookup_entry::command::CreateLookupEntry;
use crate::modules::lookups::use_cases::create_lookup_entry::decide::{
    LookupDecision, decide_create,
};
use crate::shared::core::errors::ApplicationError;
use crate::shared::core::primitives::non_blank;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedLookupEntry {
    pub id: String,
    /// `false` when an existing entry with the same name was reused.
    pub created: bool,
}

pub struct CreateLookupEntryHandler<TTable>
where
    TTable: LookupTable + Send + Sync + 'static,
{
    table: Arc<TTable>,
    referenced: Option<Arc<TTable>>,
}

impl<TTable> CreateLookupEntryHandler<TTable>
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
        command: CreateLookupEntry,
    ) -> Result<CreatedLookupEntry, ApplicationError> {
        let kind = self.table.kind();
        let existing = if kind.deduplicates_by_name() {
            self.table.find_by_name(&command.name).await?
        } else {
            None
        };
        let zone_type_exists =
            reference_exists(self.referenced.as_deref(), command.zone_type_id.clone()).await?;

        match decide_create(kind, existing.as_ref(), command, zone_type_exists) {
            LookupDecision::Create(entry) => {
                let id = entry.id.clone();
                self.table.insert(entry).await?;
                tracing::info!(kind = kind.label(), %id, "lookup entry created");
                Ok(CreatedLookupEntry { id, created: true })
            }
            LookupDecision::Existing(id) => Ok(CreatedLookupEntry { id, created: false }),
            LookupDecision::Rejected { reason } => {
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}

/// `true` when the referenced table holds a live entry with that id.
pub async fn reference_exists<TTable>(
    referenced: Option<&TTable>,
    id: Option<String>,
) -> Result<bool, ApplicationError>
where
    TTable: LookupTable + Send + Sync + 'static,
{
    match (referenced, non_blank(id)) {
        (Some(table), Some(id)) => Ok(table.get(&id).await?.is_some()),
        _ => Ok(false),
    }
}
