#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateLookupEntry {
    pub id: String,
    pub name: String,
    pub comments: Option<String>,
    /// Checkpoints only; defaults to active.
    pub active: Option<bool>,
    /// Zones only.
    pub zone_type_id: Option<String>,
    pub created_at: i64,
    pub created_by: String,
}
