/// Partial change of a lookup entry. `None` leaves a field as it is; a blank
/// string clears `comments` and `zone_type_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateLookupEntry {
    pub name: Option<String>,
    pub comments: Option<String>,
    pub active: Option<bool>,
    pub zone_type_id: Option<String>,
}
