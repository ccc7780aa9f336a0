use crate::modules::query::domain::services::{
    classifier::classify,
    sanitizer::{sanitize, strip_control},
};
use crate::modules::query::domain::value_objects::QueryCategory;
use std::fmt;

/// Longest query forwarded to the backend, in characters
pub const MAX_QUERY_CHARS: usize = 500;

/// A sanitized, trimmed, non-empty search query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    /// Clean raw user input. Returns `None` when nothing is left to search for.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = strip_control(&sanitize(raw));
        let capped: String = cleaned.trim().chars().take(MAX_QUERY_CHARS).collect();
        let trimmed = capped.trim();

        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> QueryCategory {
        classify(&self.0)
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
