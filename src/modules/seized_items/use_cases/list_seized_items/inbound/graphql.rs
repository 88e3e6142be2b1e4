use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};
use chrono::NaiveDate;

use crate::modules::seized_items::core::status::SeizedItemStatus;
use crate::modules::seized_items::use_cases::list_seized_items::filter::SeizedItemFilter;
use crate::modules::seized_items::use_cases::list_seized_items::projection::SeizedItemView;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, PartialEq, Eq)]
#[graphql(name = "SeizedItemStatus")]
pub enum GqlSeizedItemStatus {
    Deposited,
    Returned,
    Disposed,
    Forwarded,
}

impl From<SeizedItemStatus> for GqlSeizedItemStatus {
    fn from(status: SeizedItemStatus) -> Self {
        match status {
            SeizedItemStatus::Deposited => Self::Deposited,
            SeizedItemStatus::Returned => Self::Returned,
            SeizedItemStatus::Disposed => Self::Disposed,
            SeizedItemStatus::Forwarded => Self::Forwarded,
        }
    }
}

impl From<GqlSeizedItemStatus> for SeizedItemStatus {
    fn from(status: GqlSeizedItemStatus) -> Self {
        match status {
            GqlSeizedItemStatus::Deposited => Self::Deposited,
            GqlSeizedItemStatus::Returned => Self::Returned,
            GqlSeizedItemStatus::Disposed => Self::Disposed,
            GqlSeizedItemStatus::Forwarded => Self::Forwarded,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "SeizedItem")]
pub struct GqlSeizedItem {
    pub seized_item_id: ID,
    pub person_id: String,
    pub item_type_id: String,
    pub number: u32,
    pub date: NaiveDate,
    pub confiscated_by: Option<String>,
    pub status: GqlSeizedItemStatus,
    pub status_label: String,
    pub depository_id: Option<String>,
    pub status_comment: Option<String>,
    pub returned_on: Option<NaiveDate>,
    pub returned_by: Option<String>,
    pub comments: Option<String>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
}

impl From<SeizedItemView> for GqlSeizedItem {
    fn from(v: SeizedItemView) -> Self {
        Self {
            seized_item_id: ID(v.seized_item_id),
            person_id: v.person_id,
            item_type_id: v.item_type_id,
            number: v.number,
            date: v.date,
            confiscated_by: v.confiscated_by,
            status: v.status.into(),
            status_label: v.status_label,
            depository_id: v.depository_id,
            status_comment: v.status_comment,
            returned_on: v.returned_on,
            returned_by: v.returned_by,
            comments: v.comments,
            created_at: v.created_at,
            created_by: v.created_by,
            updated_at: v.updated_at,
            updated_by: v.updated_by,
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Deposited items unless `statuses` says otherwise; an empty list means any status.
    #[allow(clippy::too_many_arguments)]
    async fn seized_items(
        &self,
        context: &Context<'_>,
        search: Option<String>,
        statuses: Option<Vec<GqlSeizedItemStatus>>,
        item_type_id: Option<String>,
        depository_id: Option<String>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> GqlResult<Vec<GqlSeizedItem>> {
        let state = context.data_unchecked::<AppState>();
        let defaults = SeizedItemFilter::default();
        let filter = SeizedItemFilter {
            search,
            statuses: statuses
                .map(|statuses| statuses.into_iter().map(Into::into).collect())
                .unwrap_or(defaults.statuses),
            item_type_id,
            depository_id,
            date_from,
            date_to,
        };
        let list = state
            .queries
            .list(
                &filter,
                offset.unwrap_or(0).max(0) as u64,
                state.list_limits.resolve(limit.map(|l| l.max(0) as u64)),
            )
            .await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn seized_item(&self, context: &Context<'_>, id: ID) -> GqlResult<Option<GqlSeizedItem>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.queries.find_by_id(&id).await?.map(Into::into))
    }
}
