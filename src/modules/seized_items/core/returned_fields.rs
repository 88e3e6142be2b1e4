use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::seized_items::core::status::SeizedItemStatus;

/// Date of return and the person who handed the item back.
/// Both are set while the item is returned, both are empty otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReturnedFields {
    pub returned_on: Option<NaiveDate>,
    pub returned_by: Option<String>,
}

impl ReturnedFields {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stamped(returned_on: NaiveDate, returned_by: impl Into<String>) -> Self {
        Self {
            returned_on: Some(returned_on),
            returned_by: Some(returned_by.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.returned_on.is_none() && self.returned_by.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnedFieldsChange {
    Stamp(ReturnedFields),
    Clear,
    Unchanged,
}

impl ReturnedFieldsChange {
    /// The values to write, if any.
    pub fn into_update(self) -> Option<ReturnedFields> {
        match self {
            ReturnedFieldsChange::Stamp(fields) => Some(fields),
            ReturnedFieldsChange::Clear => Some(ReturnedFields::empty()),
            ReturnedFieldsChange::Unchanged => None,
        }
    }
}

/// Decide how the returned fields follow the status of a saved item.
///
/// Entering the returned status stamps `today` and `person_id` once; values that
/// are already there (also partially) are kept. Any other status clears both.
pub fn derive_returned_fields(
    status: SeizedItemStatus,
    current: &ReturnedFields,
    today: NaiveDate,
    person_id: &str,
) -> ReturnedFieldsChange {
    if !status.records_return() {
        return ReturnedFieldsChange::Clear;
    }
    if current.is_empty() {
        ReturnedFieldsChange::Stamp(ReturnedFields::stamped(today, person_id))
    } else {
        ReturnedFieldsChange::Unchanged
    }
}
