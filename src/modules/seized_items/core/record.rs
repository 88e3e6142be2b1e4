use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::seized_items::core::returned_fields::ReturnedFields;
use crate::modules::seized_items::core::status::SeizedItemStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeizedItemRow {
    pub seized_item_id: String,
    /// Owner of the item.
    pub person_id: String,
    pub item_type_id: String,
    pub number: u32,
    /// Confiscated on.
    pub date: NaiveDate,
    pub confiscated_by: Option<String>,
    pub status: SeizedItemStatus,
    pub depository_id: Option<String>,
    pub status_comment: Option<String>,
    pub returned: ReturnedFields,
    pub comments: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub deleted_at: Option<i64>,
}

impl SeizedItemRow {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn touch(&mut self, updated_at: i64, updated_by: &str) {
        self.updated_at = updated_at;
        self.updated_by = updated_by.to_string();
    }
}
