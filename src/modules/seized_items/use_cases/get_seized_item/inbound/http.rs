use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(seized_item_id): Path<String>,
) -> impl IntoResponse {
    match state.queries.find_by_id(&seized_item_id).await {
        Ok(Some(view)) => Json(view).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => {
            tracing::warn!(%error, seized_item_id, "loading seized item failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
