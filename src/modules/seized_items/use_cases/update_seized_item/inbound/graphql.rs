use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::seized_items::use_cases::list_seized_items::inbound::graphql::{
    GqlSeizedItem, GqlSeizedItemStatus,
};
use crate::modules::seized_items::use_cases::update_seized_item::command::UpdateSeizedItem;
use crate::shell::actor::Actor;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateSeizedItemMutation;

#[Object]
impl UpdateSeizedItemMutation {
    async fn update_seized_item_status(
        &self,
        context: &Context<'_>,
        id: ID,
        status: GqlSeizedItemStatus,
        status_comment: Option<String>,
    ) -> GqlResult<GqlSeizedItem> {
        let actor = context
            .data_opt::<Actor>()
            .ok_or_else(|| async_graphql::Error::new("missing x-person-id header"))?;
        let state = context.data_unchecked::<AppState>();

        let patch = UpdateSeizedItem {
            status: Some(status.into()),
            status_comment,
            ..UpdateSeizedItem::default()
        };

        let view = state
            .update_handler
            .handle(&id, patch, &actor.context())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(view.into())
    }
}
