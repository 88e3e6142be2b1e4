// Shared test fixture for the RegisterSeizedItem command.
// The canonical values live in json/register_seized_item.json.

use crate::modules::seized_items::core::status::SeizedItemStatus;
use crate::modules::seized_items::use_cases::register_seized_item::command::RegisterSeizedItem;
use chrono::NaiveDate;
use serde::Deserialize;

const REGISTER_SEIZED_ITEM_JSON: &str = include_str!("json/register_seized_item.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterSeizedItemDto {
    pub seized_item_id: String,
    pub person_id: String,
    pub item_type_id: String,
    pub number: i64,
    pub date: NaiveDate,
    pub depository_id: Option<String>,
    pub comments: Option<String>,
}

pub struct RegisterSeizedItemBuilder {
    inner: RegisterSeizedItem,
}

impl Default for RegisterSeizedItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterSeizedItemBuilder {
    pub fn new() -> Self {
        let dto: RegisterSeizedItemDto = serde_json::from_str(REGISTER_SEIZED_ITEM_JSON).unwrap();

        Self {
            inner: RegisterSeizedItem {
                seized_item_id: dto.seized_item_id,
                person_id: dto.person_id,
                item_type_id: dto.item_type_id,
                number: dto.number,
                date: Some(dto.date),
                confiscated_by: None,
                status: None,
                depository_id: dto.depository_id,
                status_comment: None,
                comments: dto.comments,
            },
        }
    }

    pub fn seized_item_id(mut self, v: impl Into<String>) -> Self {
        self.inner.seized_item_id = v.into();
        self
    }

    pub fn person_id(mut self, v: impl Into<String>) -> Self {
        self.inner.person_id = v.into();
        self
    }

    pub fn item_type_id(mut self, v: impl Into<String>) -> Self {
        self.inner.item_type_id = v.into();
        self
    }

    pub fn number(mut self, v: i64) -> Self {
        self.inner.number = v;
        self
    }

    pub fn date(mut self, v: Option<NaiveDate>) -> Self {
        self.inner.date = v;
        self
    }

    pub fn confiscated_by(mut self, v: impl Into<String>) -> Self {
        self.inner.confiscated_by = Some(v.into());
        self
    }

    pub fn status(mut self, v: SeizedItemStatus) -> Self {
        self.inner.status = Some(v);
        self
    }

    pub fn depository_id(mut self, v: Option<String>) -> Self {
        self.inner.depository_id = v;
        self
    }

    pub fn status_comment(mut self, v: impl Into<String>) -> Self {
        self.inner.status_comment = Some(v.into());
        self
    }

    pub fn build(self) -> RegisterSeizedItem {
        self.inner
    }
}

#[cfg(test)]
mod register_seized_item_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = RegisterSeizedItemBuilder::default().build();
        assert_eq!(built.seized_item_id, "si-fixed-0001");
        assert_eq!(built.person_id, "owner-fixed-0001");
        assert_eq!(built.item_type_id, "it-fixed-0001");
        assert_eq!(built.number, 2);
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(built.depository_id.as_deref(), Some("dp-fixed-0001"));
        assert_eq!(built.status, None);
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = RegisterSeizedItemBuilder::new()
            .seized_item_id("si-123")
            .person_id("owner-456")
            .item_type_id("it-789")
            .number(5)
            .date(None)
            .confiscated_by("officer-1")
            .status(SeizedItemStatus::Forwarded)
            .depository_id(None)
            .status_comment("sent to police")
            .build();

        assert_eq!(custom.seized_item_id, "si-123");
        assert_eq!(custom.person_id, "owner-456");
        assert_eq!(custom.item_type_id, "it-789");
        assert_eq!(custom.number, 5);
        assert_eq!(custom.date, None);
        assert_eq!(custom.confiscated_by.as_deref(), Some("officer-1"));
        assert_eq!(custom.status, Some(SeizedItemStatus::Forwarded));
        assert_eq!(custom.depository_id, None);
        assert_eq!(custom.status_comment.as_deref(), Some("sent to police"));
    }
}
