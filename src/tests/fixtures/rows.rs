// Canonical rows shared by store, filter and handler tests.

use crate::modules::lookups::core::entry::LookupEntry;
use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::core::returned_fields::ReturnedFields;
use crate::modules::seized_items::core::status::SeizedItemStatus;
use chrono::NaiveDate;

pub const FIXED_ITEM_TYPE_ID: &str = "it-fixed-0001";
pub const FIXED_DEPOSITORY_ID: &str = "dp-fixed-0001";
pub const FIXED_OWNER_ID: &str = "owner-fixed-0001";
pub const FIXED_CREATED_BY: &str = "person-fixed-0001";

pub fn make_seized_item_row(seized_item_id: &str) -> SeizedItemRow {
    SeizedItemRow {
        seized_item_id: seized_item_id.to_string(),
        person_id: FIXED_OWNER_ID.to_string(),
        item_type_id: FIXED_ITEM_TYPE_ID.to_string(),
        number: 1,
        date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        confiscated_by: Some(FIXED_CREATED_BY.to_string()),
        status: SeizedItemStatus::Deposited,
        depository_id: Some(FIXED_DEPOSITORY_ID.to_string()),
        status_comment: None,
        returned: ReturnedFields::empty(),
        comments: None,
        created_at: 1_700_000_000_000,
        created_by: FIXED_CREATED_BY.to_string(),
        updated_at: 1_700_000_000_000,
        updated_by: FIXED_CREATED_BY.to_string(),
        deleted_at: None,
    }
}

pub fn make_lookup_entry(id: &str, name: &str) -> LookupEntry {
    LookupEntry {
        id: id.to_string(),
        name: name.to_string(),
        comments: None,
        active: None,
        zone_type_id: None,
        created_at: 1_700_000_000_000,
        created_by: FIXED_CREATED_BY.to_string(),
        updated_at: 1_700_000_000_000,
        updated_by: FIXED_CREATED_BY.to_string(),
        deleted_at: None,
    }
}
