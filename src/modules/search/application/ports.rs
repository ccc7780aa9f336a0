use crate::modules::search::domain::SearchEndpoint;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// Backend search operations
///
/// Implementations issue exactly one request per call and return the raw JSON
/// body; transport failures and non-OK statuses are `AppError::NetworkError`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, endpoint: SearchEndpoint, query: &str) -> AppResult<Value>;
}
