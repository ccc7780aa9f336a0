use super::SearchResult;
use crate::modules::query::QueryCategory;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A completed search: what was asked, when, and what came back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    /// Monotonic per-service sequence number; higher is newer
    pub id: u64,
    /// Sanitized query as echoed back to the user (empty when none was given)
    pub query: String,
    pub category: QueryCategory,
    pub submitted_at: DateTime<Utc>,
    pub result: SearchResult,
}
