use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::lookups::adapters::outbound::lookup_table::LookupTable;
use crate::modules::lookups::core::entry::{LookupEntryView, LookupKind};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(kind): Extension<LookupKind>,
) -> Response {
    match state.lookups(kind).table.list().await {
        Ok(entries) => Json(
            entries
                .into_iter()
                .map(LookupEntryView::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(error) => {
            tracing::warn!(%error, kind = kind.label(), "listing lookup entries failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
