use super::dto::IpLookupDto;
use crate::modules::query::sanitize;
use crate::modules::search::domain::{
    FailureKind, IpResult, RecordField, RecordListResult, SearchEndpoint, SearchResult,
    SourceRecord,
};
use serde_json::{Map, Value};
use tracing::warn;

/// Reserved record key naming the source database; never shown as a field
pub const SOURCE_KEY: &str = "data";

const UNEXPECTED_RESPONSE: &str = "Unexpected response from backend";

/// Converts raw backend JSON into a `SearchResult`
pub struct ResponseMapper;

impl ResponseMapper {
    pub fn to_domain(endpoint: SearchEndpoint, query: &str, raw: Value) -> SearchResult {
        let Value::Object(body) = raw else {
            warn!("{} search returned a non-object body", endpoint);
            return SearchResult::error(FailureKind::Backend, UNEXPECTED_RESPONSE);
        };

        if let Some(error) = body.get("error").filter(|v| !v.is_null()) {
            let message = display_value(error).unwrap_or_else(|| "Unknown backend error".into());
            return SearchResult::error(FailureKind::Backend, message);
        }

        if body.get("status").and_then(Value::as_str) == Some("fail") {
            return match body.get("message").and_then(display_value) {
                Some(message) => SearchResult::error(FailureKind::Backend, message),
                None => SearchResult::Empty,
            };
        }

        match endpoint {
            SearchEndpoint::Ip => Self::to_ip_result(query, &body),
            SearchEndpoint::Phone | SearchEndpoint::Email => Self::to_record_list(&body),
        }
    }

    fn to_ip_result(query: &str, body: &Map<String, Value>) -> SearchResult {
        let dto = IpLookupDto::from_map(body);
        let clean = |value: Option<String>| value.as_deref().and_then(clean_text);

        SearchResult::Ip(IpResult {
            query: clean(dto.query).unwrap_or_else(|| query.to_string()),
            country: clean(dto.country),
            region: clean(dto.region_name).or_else(|| clean(dto.region)),
            city: clean(dto.city),
            isp: clean(dto.isp),
            lat: dto.lat,
            lon: dto.lon,
            timezone: clean(dto.timezone),
        })
    }

    fn to_record_list(body: &Map<String, Value>) -> SearchResult {
        let records: Vec<SourceRecord> = match body.get("results") {
            Some(Value::Array(items)) => items.iter().filter_map(Self::to_source_record).collect(),
            _ => Vec::new(),
        };

        if records.is_empty() {
            // An empty list may still carry an explanation from the backend
            match body.get("message").and_then(display_value) {
                Some(message) => SearchResult::error(FailureKind::Backend, message),
                None => SearchResult::Empty,
            }
        } else {
            SearchResult::Records(RecordListResult::new(records))
        }
    }

    fn to_source_record(item: &Value) -> Option<SourceRecord> {
        let Value::Object(map) = item else {
            warn!("Skipping non-object search record: {}", item);
            return None;
        };

        let source_label = map.get(SOURCE_KEY).and_then(display_value);
        let fields = map
            .iter()
            .filter(|(key, _)| key.as_str() != SOURCE_KEY)
            .map(|(key, value)| RecordField::new(sanitize(key), display_value(value)))
            .collect();

        Some(SourceRecord::new(source_label, fields))
    }
}

/// Flatten a JSON value into display text; `None` for null, blank and empty values
fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => clean_text(s),
        Value::Bool(_) | Value::Number(_) => Some(value.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(display_value).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Object(_) => clean_text(&value.to_string()),
    }
}

fn clean_text(text: &str) -> Option<String> {
    let cleaned = sanitize(text);
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
