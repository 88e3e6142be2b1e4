use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::actor::Actor;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(seized_item_id): Path<String>,
    actor: Actor,
) -> impl IntoResponse {
    match state
        .delete_handler
        .handle(&seized_item_id, &actor.context())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

#[cfg(test)]
mod delete_seized_item_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::delete,
    };
    use tower::ServiceExt;

    use crate::shell::actor::PERSON_ID_HEADER;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::commands::register_seized_item::RegisterSeizedItemBuilder;
    use crate::tests::fixtures::context::make_context;
    use crate::tests::fixtures::state::seeded_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/seized-items/{id}", delete(handle))
            .with_state(state)
    }

    fn request(id: &str) -> Request<Body> {
        Request::delete(format!("/seized-items/{id}"))
            .header(PERSON_ID_HEADER, "person-A")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_204_then_404_once_deleted() {
        let state = seeded_state().await;
        let command = RegisterSeizedItemBuilder::new().build();
        state
            .register_handler
            .handle(command.clone(), &make_context("person-A"))
            .await
            .unwrap();

        let first = app(state.clone())
            .oneshot(request(&command.seized_item_id))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);
        assert!(
            state
                .queries
                .find_by_id(&command.seized_item_id)
                .await
                .unwrap()
                .is_none()
        );

        let second = app(state)
            .oneshot(request(&command.seized_item_id))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_401_without_a_person_header() {
        let response = app(seeded_state().await)
            .oneshot(
                Request::delete("/seized-items/si-0001")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
