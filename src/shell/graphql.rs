use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, Router, http::HeaderMap, response::Html, routing::get};

pub use crate::modules::seized_items::use_cases::list_seized_items::inbound::graphql::QueryRoot;
use crate::modules::seized_items::use_cases::register_seized_item::inbound::graphql::RegisterSeizedItemMutation;
use crate::modules::seized_items::use_cases::update_seized_item::inbound::graphql::UpdateSeizedItemMutation;
use crate::shell::actor::Actor;
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct MutationRoot(RegisterSeizedItemMutation, UpdateSeizedItemMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub fn routes(schema: AppSchema) -> Router {
    Router::new()
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
}

async fn graphql(
    Extension(schema): Extension<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(actor) = Actor::from_headers(&headers) {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}

#[cfg(test)]
mod graphql_schema_tests {
    use super::*;
    use crate::tests::fixtures::rows::{FIXED_DEPOSITORY_ID, FIXED_ITEM_TYPE_ID};
    use crate::tests::fixtures::state::seeded_state;
    use async_graphql::Request;

    fn register_mutation() -> String {
        format!(
            r#"mutation {{ registerSeizedItem(personId: "owner-1", itemTypeId: "{FIXED_ITEM_TYPE_ID}", number: 1, depositoryId: "{FIXED_DEPOSITORY_ID}") }}"#
        )
    }

    #[tokio::test]
    async fn it_should_reject_mutations_without_an_actor() {
        let schema = build_schema(seeded_state().await);
        let response = schema.execute(register_mutation()).await;
        assert!(!response.errors.is_empty());
        assert!(response.errors[0].message.contains("x-person-id"));
    }

    #[tokio::test]
    async fn it_should_stamp_the_return_through_the_status_mutation() {
        let schema = build_schema(seeded_state().await);
        let actor = Actor("person-A".into());
        let registered = schema
            .execute(Request::new(register_mutation()).data(actor))
            .await;
        assert!(registered.errors.is_empty(), "{:?}", registered.errors);
        let data = registered.data.into_json().unwrap();
        let id = data["registerSeizedItem"].as_str().unwrap().to_string();

        let update = format!(
            r#"mutation {{ updateSeizedItemStatus(id: "{id}", status: RETURNED) {{ status returnedBy returnedOn }} }}"#
        );
        let updated = schema
            .execute(Request::new(update).data(Actor("person-B".into())))
            .await;
        assert!(updated.errors.is_empty(), "{:?}", updated.errors);
        let data = updated.data.into_json().unwrap();
        assert_eq!(data["updateSeizedItemStatus"]["status"], "RETURNED");
        assert_eq!(data["updateSeizedItemStatus"]["returnedBy"], "person-B");
        assert!(data["updateSeizedItemStatus"]["returnedOn"].is_string());

        let listed = schema
            .execute("{ seizedItems(statuses: [RETURNED]) { seizedItemId } }")
            .await;
        let data = listed.data.into_json().unwrap();
        assert_eq!(data["seizedItems"][0]["seizedItemId"], id.as_str());
    }
}
