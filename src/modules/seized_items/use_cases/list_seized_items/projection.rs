use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::core::status::SeizedItemStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeizedItemView {
    pub seized_item_id: String,
    pub person_id: String,
    pub item_type_id: String,
    pub number: u32,
    pub date: NaiveDate,
    pub confiscated_by: Option<String>,
    pub status: SeizedItemStatus,
    pub status_label: String,
    pub depository_id: Option<String>,
    pub status_comment: Option<String>,
    pub returned_on: Option<NaiveDate>,
    pub returned_by: Option<String>,
    pub comments: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl From<SeizedItemRow> for SeizedItemView {
    fn from(row: SeizedItemRow) -> Self {
        Self {
            seized_item_id: row.seized_item_id,
            person_id: row.person_id,
            item_type_id: row.item_type_id,
            number: row.number,
            date: row.date,
            confiscated_by: row.confiscated_by,
            status: row.status,
            status_label: row.status.label().to_string(),
            depository_id: row.depository_id,
            status_comment: row.status_comment,
            returned_on: row.returned.returned_on,
            returned_by: row.returned.returned_by,
            comments: row.comments,
            created_at: row.created_at,
            created_by: row.created_by,
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        }
    }
}
