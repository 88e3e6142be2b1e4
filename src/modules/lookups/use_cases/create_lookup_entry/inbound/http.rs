use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::lookups::core::entry::LookupKind;
use crate::modules::lookups::use_cases::create_lookup_entry::command::CreateLookupEntry;
use crate::shared::core::primitives::new_record_id;
use crate::shell::actor::Actor;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateLookupEntryBody {
    pub name: String,
    pub comments: Option<String>,
    pub active: Option<bool>,
    pub zone_type_id: Option<String>,
}

/// Creates an entry in the table the route was mounted for.
pub async fn handle(
    State(state): State<AppState>,
    Extension(kind): Extension<LookupKind>,
    actor: Actor,
    body: Result<Json<CreateLookupEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let context = actor.context();
    let command = CreateLookupEntry {
        id: new_record_id(),
        name: body.name,
        comments: body.comments,
        active: body.active,
        zone_type_id: body.zone_type_id,
        created_at: context.now_ms,
        created_by: context.person_id,
    };

    match state.lookups(kind).create_handler.handle(command).await {
        Ok(created) => {
            let status = if created.created {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(created)).into_response()
        }
        Err(error) => error_response(error),
    }
}
