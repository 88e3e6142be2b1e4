use crate::shared::core::primitives::RequestContext;
use chrono::{NaiveDate, TimeZone, Utc};

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

/// Request context pinned to noon UTC on `fixed_today()`.
pub fn make_context(person_id: &str) -> RequestContext {
    RequestContext::new(
        person_id,
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap(),
    )
}
