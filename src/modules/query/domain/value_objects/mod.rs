mod query;
mod query_category;

pub use query::{Query, MAX_QUERY_CHARS};
pub use query_category::QueryCategory;
