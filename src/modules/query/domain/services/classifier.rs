use super::validator::{is_valid_email, is_valid_ip, is_valid_phone};
use crate::modules::query::domain::value_objects::QueryCategory;

/// Validators in priority order; the first match wins
const PRIORITY: [(QueryCategory, fn(&str) -> bool); 3] = [
    (QueryCategory::Ip, is_valid_ip),
    (QueryCategory::Phone, is_valid_phone),
    (QueryCategory::Email, is_valid_email),
];

pub fn classify(query: &str) -> QueryCategory {
    PRIORITY
        .iter()
        .find(|(_, matches)| matches(query))
        .map(|(category, _)| *category)
        .unwrap_or(QueryCategory::Unrecognized)
}
