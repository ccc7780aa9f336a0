// Feature modules
// query:  sanitize, validate and classify raw input
// search: dispatch to the backend and keep the result pane current
// auth:   login gate and session checks
// render: turn results into terminal text, JSON or HTML

pub mod auth;
pub mod query;
pub mod render;
pub mod search;
