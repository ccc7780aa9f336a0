mod endpoint;
mod search_result;
mod submission;

pub use endpoint::SearchEndpoint;
pub use search_result::{
    ErrorResult, FailureKind, IpResult, RecordField, RecordListResult, SearchResult, SourceRecord,
};
pub use submission::Submission;
