use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display as StrumDisplay};

use crate::config::CatalogConfig;
use crate::domain::auth::{AuthTokenCache, UtcClock};
use crate::domain::catalog::{
    CatalogRepository, FetchOutcome, Filter, FilterField, Item, ItemId, PageRequest,
};
use crate::domain::errors::{CatalogError, FetchResult};
use crate::domain::logging::LogComponent;
use crate::infrastructure::services::BrowserUtcClock;
use crate::{log_debug, log_error, log_info};

/// Server-side operation selected by the request body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, StrumDisplay)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ApiAction {
    GetIds,
    GetItems,
    GetFields,
    Filter,
}

/// `{"action": ..., "params": ...}`
#[derive(Debug, Serialize)]
pub struct ApiRequest<'a, P: Serialize> {
    pub action: ApiAction,
    pub params: &'a P,
}

impl<'a, P: Serialize> ApiRequest<'a, P> {
    pub fn new(action: ApiAction, params: &'a P) -> Self {
        Self { action, params }
    }

    pub fn to_body(&self) -> FetchResult<String> {
        serde_json::to_string(self).map_err(|e| {
            CatalogError::Transport(format!("Failed to serialize body: {}", e))
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ItemsParams<'a> {
    pub ids: &'a [ItemId],
}

#[derive(Debug, Serialize)]
pub struct FieldsParams {
    pub field: FilterField,
}

#[derive(Debug, Deserialize)]
struct ApiResponse<T> {
    result: Vec<T>,
}

/// Headers every request carries.
pub fn api_headers(token: &str) -> [(&'static str, String); 2] {
    [
        ("X-Auth", token.to_string()),
        ("Content-Type", "application/json".to_string()),
    ]
}

/// gloo-net client for the catalog endpoint
pub struct CatalogApiClient {
    endpoint: String,
    auth: AuthTokenCache,
    clock: Box<dyn UtcClock>,
}

impl CatalogApiClient {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            auth: AuthTokenCache::new(config.auth_secret.clone()),
            clock: Box::new(BrowserUtcClock),
        }
    }

    pub fn with_clock(mut self, clock: impl UtcClock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `X-Auth` value for today; recomputed after UTC midnight.
    pub fn auth_header(&self) -> String {
        self.auth.token_for(self.clock.today())
    }

    async fn post_action<P, T>(&self, action: ApiAction, params: &P) -> FetchResult<Vec<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let body = ApiRequest::new(action, params).to_body()?;
        log_debug!(
            LogComponent::Infrastructure("CatalogApi"),
            "🌐 POST {} {}",
            self.endpoint,
            body
        );

        let mut request = Request::post(&self.endpoint);
        for (name, value) in api_headers(&self.auth_header()) {
            request = request.header(name, &value);
        }

        let request = request.body(body).map_err(|e| {
            CatalogError::Transport(format!("Failed to create request body: {:?}", e))
        })?;
        let response = request.send().await.map_err(|e| {
            CatalogError::Transport(format!("Request failed: {:?}", e))
        })?;

        if !response.ok() {
            return Err(CatalogError::HttpStatus {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let data = response.json::<ApiResponse<T>>().await.map_err(|e| {
            CatalogError::Decode(format!("Failed to parse JSON response: {:?}", e))
        })?;

        Ok(data.result)
    }

    /// Logs the result of `action` and folds it into an outcome.
    fn settle<T>(action: ApiAction, result: FetchResult<Vec<T>>) -> FetchOutcome<T> {
        match &result {
            Ok(records) => {
                log_info!(
                    LogComponent::Infrastructure("CatalogApi"),
                    "✅ {} returned {} records",
                    action,
                    records.len()
                );
            }
            Err(err) => {
                log_error!(
                    LogComponent::Infrastructure("CatalogApi"),
                    "❌ {} failed: {}",
                    action,
                    err
                );
            }
        }
        FetchOutcome::from(result)
    }
}

impl CatalogRepository for CatalogApiClient {
    async fn fetch_items_by_ids(&self, ids: &[ItemId]) -> FetchOutcome<Item> {
        let params = ItemsParams { ids };
        let result = self.post_action::<_, Item>(ApiAction::GetItems, &params);
        Self::settle(ApiAction::GetItems, result.await)
    }

    async fn fetch_field_values(&self, field: FilterField) -> FetchOutcome<Value> {
        let params = FieldsParams { field };
        let result = self.post_action::<_, Value>(ApiAction::GetFields, &params);
        Self::settle(ApiAction::GetFields, result.await)
    }

    async fn fetch_ids_page(&self, page: PageRequest) -> FetchOutcome<ItemId> {
        let result = self.post_action::<_, ItemId>(ApiAction::GetIds, &page);
        Self::settle(ApiAction::GetIds, result.await)
    }

    async fn filter_items(&self, filter: &Filter) -> FetchOutcome<ItemId> {
        let result = self.post_action::<_, ItemId>(ApiAction::Filter, filter);
        Self::settle(ApiAction::Filter, result.await)
    }
}
