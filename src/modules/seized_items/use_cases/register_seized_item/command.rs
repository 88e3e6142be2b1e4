use chrono::NaiveDate;

use crate::modules::seized_items::core::status::SeizedItemStatus;

/// Registration input. Return date and returning person are not part of it;
/// they only ever follow from the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSeizedItem {
    pub seized_item_id: String,
    pub person_id: String,
    pub item_type_id: String,
    pub number: i64,
    /// Defaults to today.
    pub date: Option<NaiveDate>,
    /// Defaults to the acting person.
    pub confiscated_by: Option<String>,
    /// Defaults to deposited.
    pub status: Option<SeizedItemStatus>,
    pub depository_id: Option<String>,
    pub status_comment: Option<String>,
    pub comments: Option<String>,
}
