use chrono::NaiveDate;

use crate::modules::seized_items::core::record::SeizedItemRow;
use crate::modules::seized_items::core::status::{SeizedItemStatus, UnknownStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeizedItemFilter {
    /// Case-insensitive substring over owner, status comment and comments.
    pub search: Option<String>,
    /// Empty means any status.
    pub statuses: Vec<SeizedItemStatus>,
    pub item_type_id: Option<String>,
    pub depository_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Default for SeizedItemFilter {
    /// Items still held in a depository.
    fn default() -> Self {
        Self {
            search: None,
            statuses: vec![SeizedItemStatus::Deposited],
            item_type_id: None,
            depository_id: None,
            date_from: None,
            date_to: None,
        }
    }
}

impl SeizedItemFilter {
    pub fn any_status() -> Self {
        Self {
            statuses: Vec::new(),
            ..Self::default()
        }
    }

    /// Status set from a comma separated list of codes. Only `all` lifts the
    /// restriction; a missing or empty list keeps the deposited default.
    pub fn parse_statuses(param: Option<&str>) -> Result<Vec<SeizedItemStatus>, UnknownStatus> {
        let Some(value) = param.map(str::trim) else {
            return Ok(vec![SeizedItemStatus::Deposited]);
        };
        if value.eq_ignore_ascii_case("all") {
            return Ok(Vec::new());
        }
        let statuses = value
            .split(',')
            .filter(|code| !code.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<SeizedItemStatus>, _>>()?;
        if statuses.is_empty() {
            return Ok(vec![SeizedItemStatus::Deposited]);
        }
        Ok(statuses)
    }

    pub fn matches(&self, row: &SeizedItemRow) -> bool {
        if row.is_deleted() {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&row.status) {
            return false;
        }
        if self
            .item_type_id
            .as_ref()
            .is_some_and(|id| &row.item_type_id != id)
        {
            return false;
        }
        if self
            .depository_id
            .as_ref()
            .is_some_and(|id| row.depository_id.as_ref() != Some(id))
        {
            return false;
        }
        if self.date_from.is_some_and(|from| row.date < from) {
            return false;
        }
        if self.date_to.is_some_and(|to| row.date > to) {
            return false;
        }
        match &self.search {
            Some(term) if !term.trim().is_empty() => {
                let needle = term.trim().to_lowercase();
                [
                    Some(&row.person_id),
                    row.status_comment.as_ref(),
                    row.comments.as_ref(),
                ]
                .into_iter()
                .flatten()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }
}
