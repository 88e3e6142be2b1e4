use crate::modules::lookups::core::entry::{LookupEntry, LookupKind};
use crate::modules::lookups::use_cases::create_lookup_entry::decide::{
    LookupDecideError, check_kind_fields,
};
use crate::modules::lookups::use_cases::update_lookup_entry::command::UpdateLookupEntry;
use crate::shared::core::primitives::{RequestContext, non_blank};

/// What the handler looked up before deciding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateChecks {
    /// Another live entry of a deduplicated kind already has the new name.
    pub name_taken: bool,
    pub zone_type_exists: bool,
}

pub fn decide_update(
    kind: LookupKind,
    mut current: LookupEntry,
    patch: UpdateLookupEntry,
    checks: UpdateChecks,
    context: &RequestContext,
) -> Result<LookupEntry, LookupDecideError> {
    if let Some(name) = patch.name {
        let Some(name) = non_blank(Some(name)) else {
            return Err(LookupDecideError::BlankName);
        };
        if checks.name_taken && kind.deduplicates_by_name() {
            return Err(LookupDecideError::NameTaken {
                kind: kind.label(),
                name,
            });
        }
        current.name = name;
    }

    let zone_type_id = patch.zone_type_id.map(|id| non_blank(Some(id)));
    check_kind_fields(
        kind,
        patch.active,
        zone_type_id.as_ref().and_then(|id| id.as_deref()),
        checks.zone_type_exists,
    )?;
    if let Some(zone_type_id) = zone_type_id {
        current.zone_type_id = zone_type_id;
    }
    if let Some(active) = patch.active {
        current.active = Some(active);
    }
    if let Some(comments) = patch.comments {
        current.comments = non_blank(Some(comments));
    }

    current.touch(context.now_ms, &context.person_id);
    Ok(current)
}
