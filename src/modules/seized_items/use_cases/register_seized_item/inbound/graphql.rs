use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::seized_items::use_cases::list_seized_items::inbound::graphql::GqlSeizedItemStatus;
use crate::modules::seized_items::use_cases::register_seized_item::command::RegisterSeizedItem;
use crate::shared::core::primitives::new_record_id;
use crate::shell::actor::Actor;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RegisterSeizedItemMutation;

#[Object]
impl RegisterSeizedItemMutation {
    #[allow(clippy::too_many_arguments)]
    async fn register_seized_item(
        &self,
        context: &Context<'_>,
        person_id: String,
        item_type_id: String,
        number: i64,
        date: Option<NaiveDate>,
        confiscated_by: Option<String>,
        status: Option<GqlSeizedItemStatus>,
        depository_id: Option<String>,
        status_comment: Option<String>,
        comments: Option<String>,
    ) -> GqlResult<ID> {
        let actor = context
            .data_opt::<Actor>()
            .ok_or_else(|| async_graphql::Error::new("missing x-person-id header"))?;
        let state = context.data_unchecked::<AppState>();

        let command = RegisterSeizedItem {
            seized_item_id: new_record_id(),
            person_id,
            item_type_id,
            number,
            date,
            confiscated_by,
            status: status.map(Into::into),
            depository_id,
            status_comment,
            comments,
        };

        let seized_item_id = state
            .register_handler
            .handle(command, &actor.context())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(seized_item_id))
    }
}
