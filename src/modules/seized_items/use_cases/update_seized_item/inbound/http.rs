use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::seized_items::core::status::SeizedItemStatus;
use crate::modules::seized_items::use_cases::update_seized_item::command::UpdateSeizedItem;
use crate::shell::actor::Actor;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateSeizedItemBody {
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

impl From<UpdateSeizedItemBody> for UpdateSeizedItem {
    fn from(body: UpdateSeizedItemBody) -> Self {
        Self {
            person_id: body.person_id,
            item_type_id: body.item_type_id,
            number: body.number,
            date: body.date,
            confiscated_by: body.confiscated_by,
            status: body.status,
            depository_id: body.depository_id,
            status_comment: body.status_comment,
            comments: body.comments,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(seized_item_id): Path<String>,
    actor: Actor,
    body: Result<Json<UpdateSeizedItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .update_handler
        .handle(&seized_item_id, body.into(), &actor.context())
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}
