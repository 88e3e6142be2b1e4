use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::lookups::core::entry::LookupKind;
use crate::shell::actor::Actor;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(kind): Extension<LookupKind>,
    Path(id): Path<String>,
    actor: Actor,
) -> Response {
    match state
        .lookups(kind)
        .delete_handler
        .handle(&id, &actor.context())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}
