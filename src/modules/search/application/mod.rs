pub mod dispatcher;
pub mod ports;
pub mod result_pane;
pub mod service;

pub use dispatcher::QueryDispatcher;
pub use ports::SearchBackend;
pub use result_pane::ResultPane;
pub use service::SearchService;
