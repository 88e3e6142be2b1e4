use serde::{Deserialize, Serialize};

/// The named tables of the security registry: what seized items refer to,
/// and the checkpoints, zones and staff types around them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    ItemType,
    Depository,
    Checkpoint,
    ZoneType,
    Zone,
    StaffType,
}

impl LookupKind {
    pub const ALL: [LookupKind; 6] = [
        LookupKind::ItemType,
        LookupKind::Depository,
        LookupKind::Checkpoint,
        LookupKind::ZoneType,
        LookupKind::Zone,
        LookupKind::StaffType,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LookupKind::ItemType => "item type",
            LookupKind::Depository => "depository",
            LookupKind::Checkpoint => "checkpoint",
            LookupKind::ZoneType => "zone type",
            LookupKind::Zone => "zone",
            LookupKind::StaffType => "staff type",
        }
    }

    /// Collection path of the table in the HTTP API.
    pub fn path(self) -> &'static str {
        match self {
            LookupKind::ItemType => "/item-types",
            LookupKind::Depository => "/depositories",
            LookupKind::Checkpoint => "/checkpoints",
            LookupKind::ZoneType => "/zone-types",
            LookupKind::Zone => "/zones",
            LookupKind::StaffType => "/staff-types",
        }
    }

    /// Types are matched on name so the same type is not registered twice.
    pub fn deduplicates_by_name(self) -> bool {
        matches!(self, LookupKind::ItemType | LookupKind::ZoneType)
    }

    /// Checkpoints can be switched off without being deleted.
    pub fn has_active_flag(self) -> bool {
        matches!(self, LookupKind::Checkpoint)
    }

    /// Table whose entries this kind may point at.
    pub fn referenced_kind(self) -> Option<LookupKind> {
        match self {
            LookupKind::Zone => Some(LookupKind::ZoneType),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntry {
    pub id: String,
    pub name: String,
    pub comments: Option<String>,
    /// Checkpoints only.
    pub active: Option<bool>,
    /// Zones only.
    pub zone_type_id: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub deleted_at: Option<i64>,
}

impl LookupEntry {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }

    pub fn touch(&mut self, updated_at: i64, updated_by: &str) {
        self.updated_at = updated_at;
        self.updated_by = updated_by.to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupEntryView {
    pub id: String,
    pub name: String,
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_type_id: Option<String>,
}

impl From<LookupEntry> for LookupEntryView {
    fn from(entry: LookupEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            comments: entry.comments,
            active: entry.active,
            zone_type_id: entry.zone_type_id,
        }
    }
}
