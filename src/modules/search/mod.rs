pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{QueryDispatcher, ResultPane, SearchBackend, SearchService};
pub use domain::{
    ErrorResult, FailureKind, IpResult, RecordField, RecordListResult, SearchEndpoint,
    SearchResult, SourceRecord, Submission,
};
