use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Who performs a write and when. Passed explicitly into every handler
/// instead of being read from ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub person_id: String,
    pub today: NaiveDate,
    pub now_ms: i64,
}

impl RequestContext {
    pub fn new(person_id: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            person_id: person_id.into(),
            today: now.date_naive(),
            now_ms: now.timestamp_millis(),
        }
    }

    pub fn now(person_id: impl Into<String>) -> Self {
        Self::new(person_id, Utc::now())
    }
}

pub fn new_record_id() -> String {
    Uuid::now_v7().to_string()
}

/// Trims the value and maps blank input to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
