use crate::modules::search::domain::Submission;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The single result display area
///
/// Holds at most one submission. A newer submission replaces the shown one;
/// an older submission arriving late is refused.
#[derive(Clone, Default)]
pub struct ResultPane {
    state: Arc<Mutex<PaneState>>,
}

#[derive(Default)]
struct PaneState {
    newest_id: u64,
    current: Option<Submission>,
}

impl ResultPane {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `submission`, replacing whatever was there. Returns `false` when a
    /// newer submission has already been shown.
    pub async fn present(&self, submission: Submission) -> bool {
        let mut state = self.state.lock().await;
        if submission.id < state.newest_id {
            return false;
        }
        state.newest_id = submission.id;
        state.current = Some(submission);
        true
    }

    pub async fn current(&self) -> Option<Submission> {
        self.state.lock().await.current.clone()
    }

    pub async fn clear(&self) {
        self.state.lock().await.current = None;
    }
}
