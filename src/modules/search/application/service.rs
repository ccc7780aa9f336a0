use super::{dispatcher::QueryDispatcher, ports::SearchBackend, result_pane::ResultPane};
use crate::modules::auth::application::ports::SessionGateway;
use crate::modules::query::{Query, QueryCategory};
use crate::modules::search::domain::{
    ErrorResult, FailureKind, SearchEndpoint, SearchResult, Submission,
};
use crate::shared::domain::value_objects::{Locale, Message};
use crate::shared::utils::{LogContext, SearchThrottle};
use chrono::Utc;
use log::debug;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// The search pipeline: sanitize, classify, check the session, dispatch,
/// and publish the outcome to the result pane.
///
/// Every submission gets a fresh cancellation token and cancels the previous
/// one, so a slow older request never overwrites a newer result.
pub struct SearchService {
    session: Arc<dyn SessionGateway>,
    dispatcher: QueryDispatcher,
    throttle: SearchThrottle,
    locale: Locale,
    pane: ResultPane,
    latest: Mutex<LatestSubmission>,
}

#[derive(Default)]
struct LatestSubmission {
    id: u64,
    token: CancellationToken,
}

impl SearchService {
    pub fn new(
        session: Arc<dyn SessionGateway>,
        backend: Arc<dyn SearchBackend>,
        throttle: SearchThrottle,
        locale: Locale,
    ) -> Self {
        Self {
            session,
            dispatcher: QueryDispatcher::new(backend),
            throttle,
            locale,
            pane: ResultPane::new(),
            latest: Mutex::new(LatestSubmission::default()),
        }
    }

    pub fn pane(&self) -> &ResultPane {
        &self.pane
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Run one submission end to end and show it in the pane.
    ///
    /// Returns `None` when a newer submission superseded this one first.
    pub async fn submit(&self, raw: &str) -> Option<Submission> {
        let (id, token) = self.begin_submission().await;
        let submitted_at = Utc::now();

        let (query, category, result) = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Submission #{} superseded before completion", id);
                return None;
            }
            evaluated = self.evaluate(raw) => evaluated,
        };

        let submission = Submission {
            id,
            query,
            category,
            submitted_at,
            result,
        };

        if token.is_cancelled() || !self.pane.present(submission.clone()).await {
            debug!("Submission #{} finished after a newer one, dropped", id);
            return None;
        }
        Some(submission)
    }

    /// Cancel anything in flight and blank the pane (used on logout)
    pub async fn reset(&self) {
        self.latest.lock().await.token.cancel();
        self.pane.clear().await;
    }

    async fn begin_submission(&self) -> (u64, CancellationToken) {
        let mut latest = self.latest.lock().await;
        latest.token.cancel();
        latest.id += 1;
        latest.token = CancellationToken::new();
        (latest.id, latest.token.clone())
    }

    async fn evaluate(&self, raw: &str) -> (String, QueryCategory, SearchResult) {
        let Some(query) = Query::parse(raw) else {
            LogContext::search_operation(raw.trim(), None, Some("empty query"));
            return (
                String::new(),
                QueryCategory::Unrecognized,
                self.failure(FailureKind::Validation, Message::EmptyQuery),
            );
        };

        let category = query.category();
        let Some(endpoint) = SearchEndpoint::for_category(category) else {
            LogContext::search_operation(query.as_str(), None, Some("unrecognized format"));
            return (
                query.to_string(),
                category,
                self.failure(FailureKind::Validation, Message::UnrecognizedQuery),
            );
        };

        let result = self.authorized_dispatch(endpoint, &query).await;
        LogContext::search_operation(
            query.as_str(),
            Some(&category.to_string()),
            Some(result.outcome()),
        );
        (query.to_string(), category, result)
    }

    async fn authorized_dispatch(&self, endpoint: SearchEndpoint, query: &Query) -> SearchResult {
        // Asked on every submission; a session can expire between searches
        match self.session.is_authenticated().await {
            Ok(true) => {}
            Ok(false) => return self.failure(FailureKind::AuthRequired, Message::AuthRequired),
            Err(err) => {
                LogContext::error_with_context(&err, "Session check failed");
                return SearchResult::Error(ErrorResult::from(err));
            }
        }

        if let Err(err) = self.throttle.check() {
            debug!("{}", err);
            return self.failure(FailureKind::RateLimited, Message::RateLimited);
        }

        self.dispatcher.dispatch(endpoint, query).await
    }

    fn failure(&self, kind: FailureKind, message: Message) -> SearchResult {
        SearchResult::error(kind, self.locale.text(message))
    }
}
