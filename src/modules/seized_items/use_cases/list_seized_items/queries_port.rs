use crate::modules::seized_items::use_cases::list_seized_items::filter::SeizedItemFilter;
use crate::modules::seized_items::use_cases::list_seized_items::projection::SeizedItemView;
use async_trait::async_trait;

#[async_trait]
pub trait SeizedItemQueries {
    async fn find_by_id(&self, seized_item_id: &str) -> anyhow::Result<Option<SeizedItemView>>;

    /// Matching items, newest confiscation first.
    async fn list(
        &self,
        filter: &SeizedItemFilter,
        offset: u64,
        limit: u64,
    ) -> anyhow::Result<Vec<SeizedItemView>>;
}
