use crate::shared::errors::AppError;
use serde::Serialize;

/// Normalized outcome of one search submission
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchResult {
    Ip(IpResult),
    Records(RecordListResult),
    Empty,
    Error(ErrorResult),
}

impl SearchResult {
    pub fn error(kind: FailureKind, message: impl Into<String>) -> Self {
        SearchResult::Error(ErrorResult::new(kind, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Ip(_) | SearchResult::Records(_))
    }

    /// Short label for logs
    pub fn outcome(&self) -> &'static str {
        match self {
            SearchResult::Ip(_) => "geolocation",
            SearchResult::Records(_) => "records",
            SearchResult::Empty => "nothing found",
            SearchResult::Error(err) => err.kind.as_str(),
        }
    }
}

/// Geolocation of an IP address; every field may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IpResult {
    pub query: String,
    pub country: Option<String>,
    pub region: Option<String>,
    pub city: Option<String>,
    pub isp: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub timezone: Option<String>,
}

impl IpResult {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RecordListResult {
    pub records: Vec<SourceRecord>,
}

impl RecordListResult {
    pub fn new(records: Vec<SourceRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One leak/database hit: where it came from and its fields in backend order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRecord {
    pub source_label: Option<String>,
    pub fields: Vec<RecordField>,
}

impl SourceRecord {
    pub fn new(source_label: Option<String>, fields: Vec<RecordField>) -> Self {
        Self {
            source_label,
            fields,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordField {
    pub key: String,
    pub value: Option<String>,
}

impl RecordField {
    pub fn new(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub kind: FailureKind,
    pub message: String,
}

impl ErrorResult {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Why a submission ended without results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Empty or unrecognized query; nothing was sent
    Validation,
    /// Session is not logged in; nothing was sent
    AuthRequired,
    /// Backend answered with an explicit error
    Backend,
    /// Transport failure or non-OK HTTP status
    Network,
    /// Client-side search quota exhausted; nothing was sent
    RateLimited,
}

impl FailureKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Validation => "validation error",
            FailureKind::AuthRequired => "authorization required",
            FailureKind::Backend => "backend error",
            FailureKind::Network => "network error",
            FailureKind::RateLimited => "rate limited",
        }
    }
}

impl From<AppError> for ErrorResult {
    fn from(err: AppError) -> Self {
        let kind = match &err {
            AppError::ValidationError(_) => FailureKind::Validation,
            AppError::Unauthorized(_) => FailureKind::AuthRequired,
            AppError::BackendError(_) | AppError::SerializationError(_) => FailureKind::Backend,
            AppError::RateLimitError(_) => FailureKind::RateLimited,
            AppError::NetworkError(_)
            | AppError::RenderError(_)
            | AppError::ConfigError(_)
            | AppError::IoError(_) => FailureKind::Network,
        };
        ErrorResult::new(kind, err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_need_both_parts() {
        let mut ip = IpResult::new("8.8.8.8");
        ip.lat = Some(37.751);
        assert_eq!(ip.coordinates(), None);
        ip.lon = Some(-97.822);
        assert_eq!(ip.coordinates(), Some((37.751, -97.822)));
    }

    #[test]
    fn test_app_error_maps_to_failure_kind() {
        let err: ErrorResult = AppError::NetworkError("HTTP 502 Bad Gateway".into()).into();
        assert_eq!(err.kind, FailureKind::Network);
        assert_eq!(err.message, "HTTP 502 Bad Gateway");

        let err: ErrorResult = AppError::SerializationError("expected value".into()).into();
        assert_eq!(err.kind, FailureKind::Backend);
    }

    #[test]
    fn test_serializes_with_outcome_tag() {
        let json = serde_json::to_value(SearchResult::Empty).unwrap();
        assert_eq!(json["outcome"], "empty");

        let json =
            serde_json::to_value(SearchResult::error(FailureKind::AuthRequired, "no")).unwrap();
        assert_eq!(json["outcome"], "error");
        assert_eq!(json["kind"], "auth_required");
        assert_eq!(json["message"], "no");
    }
}
