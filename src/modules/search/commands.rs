use super::application::service::SearchService;
use crate::modules::render::Presenter;
use crate::shared::errors::AppResult;
use log::debug;

/// Run one search and render it.
///
/// `Ok(None)` means a newer submission superseded this one and nothing
/// should be printed.
pub async fn search(
    query: &str,
    search_service: &SearchService,
    presenter: &Presenter,
) -> AppResult<Option<String>> {
    debug!("search command called - query: {}", query);

    match search_service.submit(query).await {
        Some(submission) => presenter.present(&submission).map(Some),
        None => Ok(None),
    }
}
