use crate::modules::lookups::core::entry::{LookupEntry, LookupKind};
use crate::modules::lookups::use_cases::create_lookup_entry::command::CreateLookupEntry;
use crate::shared::core::primitives::non_blank;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LookupDecideError {
    #[error("name must not be empty")]
    BlankName,

    #[error("{kind} has no {field}")]
    NotApplicable {
        kind: &'static str,
        field: &'static str,
    },

    #[error("unknown zone type: {0}")]
    UnknownZoneType(String),

    #[error("{kind} {name} already exists")]
    NameTaken { kind: &'static str, name: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum LookupDecision {
    Create(LookupEntry),
    /// An entry with the same name already exists and is reused.
    Existing(String),
    Rejected { reason: LookupDecideError },
}

/// Checks shared by create and update: `active` belongs to checkpoints and
/// a zone type reference to zones, where it must point at a live zone type.
pub fn check_kind_fields(
    kind: LookupKind,
    active: Option<bool>,
    zone_type_id: Option<&str>,
    zone_type_exists: bool,
) -> Result<(), LookupDecideError> {
    if active.is_some() && !kind.has_active_flag() {
        return Err(LookupDecideError::NotApplicable {
            kind: kind.label(),
            field: "active flag",
        });
    }
    let Some(zone_type_id) = zone_type_id else {
        return Ok(());
    };
    if kind.referenced_kind() != Some(LookupKind::ZoneType) {
        return Err(LookupDecideError::NotApplicable {
            kind: kind.label(),
            field: "zone type",
        });
    }
    if !zone_type_exists {
        return Err(LookupDecideError::UnknownZoneType(zone_type_id.to_string()));
    }
    Ok(())
}

pub fn decide_create(
    kind: LookupKind,
    existing: Option<&LookupEntry>,
    command: CreateLookupEntry,
    zone_type_exists: bool,
) -> LookupDecision {
    let Some(name) = non_blank(Some(command.name)) else {
        return LookupDecision::Rejected {
            reason: LookupDecideError::BlankName,
        };
    };
    let zone_type_id = non_blank(command.zone_type_id);
    if let Err(reason) = check_kind_fields(
        kind,
        command.active,
        zone_type_id.as_deref(),
        zone_type_exists,
    ) {
        return LookupDecision::Rejected { reason };
    }
    let same_name = existing.filter(|entry| entry.has_name(&name));
    if let Some(entry) = same_name.filter(|_| kind.deduplicates_by_name()) {
        return LookupDecision::Existing(entry.id.clone());
    }
    LookupDecision::Create(LookupEntry {
        id: command.id,
        name,
        comments: non_blank(command.comments),
        active: kind
            .has_active_flag()
            .then(|| command.active.unwrap_or(true)),
        zone_type_id,
        created_at: command.created_at,
        created_by: command.created_by.clone(),
        updated_at: command.created_at,
        updated_by: command.created_by,
        deleted_at: None,
    })
}
