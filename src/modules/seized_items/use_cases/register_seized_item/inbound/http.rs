use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::seized_items::core::status::SeizedItemStatus;
use crate::modules::seized_items::use_cases::register_seized_item::command::RegisterSeizedItem;
use crate::shared::core::primitives::new_record_id;
use crate::shell::actor::Actor;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

/// `returned_on` and `returned_by` are not accepted here; unknown fields are rejected.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterSeizedItemBody {
    pub person_id: String,
    pub item_type_id: String,
    pub number: i64,
    pub date: Option<NaiveDate>,
    pub confiscated_by: Option<String>,
    pub status: Option<SeizedItemStatus>,
    pub depository_id: Option<String>,
    pub status_comment: Option<String>,
    pub comments: Option<String>,
}

#[derive(Serialize)]
pub struct RegisterSeizedItemResponse {
    pub seized_item_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<RegisterSeizedItemBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RegisterSeizedItem {
        seized_item_id: new_record_id(),
        person_id: body.person_id,
        item_type_id: body.item_type_id,
        number: body.number,
        date: body.date,
        confiscated_by: body.confiscated_by,
        status: body.status,
        depository_id: body.depository_id,
        status_comment: body.status_comment,
        comments: body.comments,
    };

    match state
        .register_handler
        .handle(command, &actor.context())
        .await
    {
        Ok(seized_item_id) => (
            StatusCode::CREATED,
            Json(RegisterSeizedItemResponse { seized_item_id }),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}
