use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::lookups::core::entry::LookupKind;
use crate::modules::lookups::use_cases::update_lookup_entry::command::UpdateLookupEntry;
use crate::shell::actor::Actor;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateLookupEntryBody {
    pub name: Option<String>,
    pub comments: Option<String>,
    pub active: Option<bool>,
    pub zone_type_id: Option<String>,
}

impl From<UpdateLookupEntryBody> for UpdateLookupEntry {
    fn from(body: UpdateLookupEntryBody) -> Self {
        Self {
            name: body.name,
            comments: body.comments,
            active: body.active,
            zone_type_id: body.zone_type_id,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(kind): Extension<LookupKind>,
    Path(id): Path<String>,
    actor: Actor,
    body: Result<Json<UpdateLookupEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state
        .lookups(kind)
        .update_handler
        .handle(&id, body.into(), &actor.context())
        .await
    {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}
