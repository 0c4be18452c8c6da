use serde_json::Value;

use super::{Filter, FilterField, FetchOutcome, Item, ItemId, PageRequest};

/// Access to the remote catalog.
///
/// Every operation is a single request; failures come back as `FetchOutcome::Failed`
/// instead of an `Err`, so callers always get something they can render.
#[allow(async_fn_in_trait)]
pub trait CatalogRepository {
    /// `get_items`
    async fn fetch_items_by_ids(&self, ids: &[ItemId]) -> FetchOutcome<Item>;

    /// `get_fields`; values are left untyped because the field decides their type.
    async fn fetch_field_values(&self, field: FilterField) -> FetchOutcome<Value>;

    /// `get_ids`
    async fn fetch_ids_page(&self, page: PageRequest) -> FetchOutcome<ItemId>;

    /// `filter`
    async fn filter_items(&self, filter: &Filter) -> FetchOutcome<ItemId>;
}
