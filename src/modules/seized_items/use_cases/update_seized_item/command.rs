use chrono::NaiveDate;

use crate::modules::seized_items::core::status::SeizedItemStatus;
use crate::shared::core::primitives::non_blank;

/// Partial update. `None` leaves a field alone; for the optional text and
/// reference fields a blank value clears them. The returned fields are not
/// part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSeizedItem {
    pub person_id: Option<String>,
    pub item_type_id: Option<String>,
    pub number: Option<i64>,
    pub date: Option<NaiveDate>,
    pub confiscated_by: Option<String>,
    pub status: Option<SeizedItemStatus>,
    pub depository_id: Option<String>,
    pub status_comment: Option<String>,
    pub comments: Option<String>,
}

impl UpdateSeizedItem {
    /// Item type the patch moves the item to, if any.
    pub fn referenced_item_type(&self) -> Option<String> {
        non_blank(self.item_type_id.clone())
    }

    /// Depository the patch attaches the item to, if any.
    pub fn referenced_depository(&self) -> Option<String> {
        non_blank(self.depository_id.clone())
    }
}
