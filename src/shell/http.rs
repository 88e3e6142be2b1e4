use axum::{
    Extension, Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use serde_json::json;

use crate::modules::lookups::core::entry::LookupKind;
use crate::modules::lookups::use_cases::create_lookup_entry::inbound::http as create_lookup_http;
use crate::modules::lookups::use_cases::delete_lookup_entry::inbound::http as delete_lookup_http;
use crate::modules::lookups::use_cases::list_lookup_entries::inbound::http as list_lookup_http;
use crate::modules::lookups::use_cases::update_lookup_entry::inbound::http as update_lookup_http;
use crate::modules::seized_items::use_cases::delete_seized_item::inbound::http as delete_http;
use crate::modules::seized_items::use_cases::get_seized_item::inbound::http as get_http;
use crate::modules::seized_items::use_cases::list_seized_items::inbound::http as list_http;
use crate::modules::seized_items::use_cases::register_seized_item::inbound::http as register_http;
use crate::modules::seized_items::use_cases::update_seized_item::inbound::http as update_http;
use crate::shared::core::errors::ApplicationError;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let seized_items = Router::new()
        .route(
            "/seized-items",
            post(register_http::handle).get(list_http::handle),
        )
        .route(
            "/seized-items/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        );

    LookupKind::ALL
        .into_iter()
        .map(lookup_routes)
        .fold(seized_items, Router::merge)
        .with_state(state)
}

/// The same four handlers serve every lookup table; the kind travels as an
/// extension.
fn lookup_routes(kind: LookupKind) -> Router<AppState> {
    Router::new()
        .route(
            kind.path(),
            post(create_lookup_http::handle)
                .get(list_lookup_http::handle),
        )
        .route(
            &format!("{}/{{id}}", kind.path()),
            patch(update_lookup_http::handle)
                .delete(delete_lookup_http::handle),
        )
        .layer(Extension(kind))
}

/// Map a handler failure onto the HTTP status the API documents for it.
pub fn error_response(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Domain(reason) => {
            (StatusCode::CONFLICT, Json(json!({ "error": reason }))).into_response()
        }
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        ApplicationError::Store(error) => {
            tracing::warn!(%error, "store failure");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
