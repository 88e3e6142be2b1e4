use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::modules::seized_items::use_cases::list_seized_items::filter::SeizedItemFilter;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListSeizedItemsParams {
    pub search: Option<String>,
    /// Comma separated status codes, or `all`.
    pub status: Option<String>,
    pub item_type_id: Option<String>,
    pub depository_id: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListSeizedItemsParams>,
) -> impl IntoResponse {
    let statuses = match SeizedItemFilter::parse_statuses(params.status.as_deref()) {
        Ok(statuses) => statuses,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error.to_string() })),
            )
                .into_response();
        }
    };
    let filter = SeizedItemFilter {
        search: params.search,
        statuses,
        item_type_id: params.item_type_id,
        depository_id: params.depository_id,
        date_from: params.date_from,
        date_to: params.date_to,
    };

    match state
        .queries
        .list(
            &filter,
            params.offset.unwrap_or(0),
            state.list_limits.resolve(params.limit),
        )
        .await
    {
        Ok(items) => Json(items).into_response(),
        Err(error) => {
            tracing::warn!(%error, "listing seized items failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
