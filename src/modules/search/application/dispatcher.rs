use super::ports::SearchBackend;
use crate::modules::query::Query;
use crate::modules::search::domain::{ErrorResult, SearchEndpoint, SearchResult};
use crate::modules::search::infrastructure::ResponseMapper;
use crate::shared::utils::{LogContext, TimedOperation};
use std::sync::Arc;

/// Sends a classified query to its backend endpoint and normalizes the reply
pub struct QueryDispatcher {
    backend: Arc<dyn SearchBackend>,
}

impl QueryDispatcher {
    pub fn new(backend: Arc<dyn SearchBackend>) -> Self {
        Self { backend }
    }

    /// One request, no retries. Never fails: every outcome is a `SearchResult`.
    pub async fn dispatch(&self, endpoint: SearchEndpoint, query: &Query) -> SearchResult {
        let timer = TimedOperation::new(&format!("{} search", endpoint));

        let result = match self.backend.search(endpoint, query.as_str()).await {
            Ok(raw) => ResponseMapper::to_domain(endpoint, query.as_str(), raw),
            Err(err) => {
                LogContext::error_with_context(&err, &format!("{} search failed", endpoint));
                SearchResult::Error(ErrorResult::from(err))
            }
        };

        timer.finish_with_info(result.outcome());
        result
    }
}
